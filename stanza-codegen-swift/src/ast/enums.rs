//! Swift enum builders.

use stanza_codegen::{Code, Fragment, Renderable};

use super::types::Access;
use crate::helpers::{end, line_break};

/// A case of a plain enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumCase {
    /// `case name`
    Plain(String),
    /// `case name(Type1, Type2)`
    Associated { name: String, types: Vec<String> },
}

impl EnumCase {
    pub fn plain(name: impl Into<String>) -> Self {
        Self::Plain(name.into())
    }

    pub fn associated(
        name: impl Into<String>,
        types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::Associated {
            name: name.into(),
            types: types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Plain(name) | Self::Associated { name, .. } => name,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Self::Plain(name) => format!("case {name}"),
            Self::Associated { name, types } => format!("case {}({})", name, types.join(", ")),
        }
    }
}

/// A case of a raw value enum; the value is emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawValueCase {
    pub name: String,
    pub value: Option<String>,
}

impl RawValueCase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Explicit raw value, e.g. `"north"` (with quotes) or `4`.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn render(&self) -> String {
        match &self.value {
            Some(value) => format!("case {} = {}", self.name, value),
            None => format!("case {}", self.name),
        }
    }
}

/// Builder for enums with plain and associated value cases.
#[derive(Debug, Clone)]
pub struct EnumSpec {
    name: String,
    access: Access,
    protocols: Vec<String>,
    cases: Vec<EnumCase>,
    body: Code,
}

impl EnumSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: Access::Internal,
            protocols: Vec::new(),
            cases: Vec::new(),
            body: Code::Empty,
        }
    }

    pub fn access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    pub fn conforms_to(mut self, protocol: impl Into<String>) -> Self {
        self.protocols.push(protocol.into());
        self
    }

    pub fn case(mut self, case: EnumCase) -> Self {
        self.cases.push(case);
        self
    }

    pub fn cases(mut self, cases: impl IntoIterator<Item = EnumCase>) -> Self {
        self.cases.extend(cases);
        self
    }

    /// Members placed after the cases (must not contain cases).
    pub fn body(mut self, body: impl Into<Code>) -> Self {
        self.body = body.into();
        self
    }
}

impl Renderable for EnumSpec {
    fn to_code(&self) -> Code {
        let mut header = format!("{}enum {}", self.access.prefix(), self.name);
        if !self.protocols.is_empty() {
            header.push_str(": ");
            header.push_str(&self.protocols.join(", "));
        }
        header.push_str(" {");

        let cases = self.cases.iter().map(|c| Fragment::line(c.render()));
        let children = members(cases.collect(), &self.body);
        Fragment::group(vec![Fragment::block(header, children), end()]).into()
    }
}

/// Builder for enums backed by a raw value type.
#[derive(Debug, Clone)]
pub struct RawValueEnumSpec {
    name: String,
    raw_type: String,
    access: Access,
    protocols: Vec<String>,
    cases: Vec<RawValueCase>,
    body: Code,
}

impl RawValueEnumSpec {
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_type: raw_type.into(),
            access: Access::Internal,
            protocols: Vec::new(),
            cases: Vec::new(),
            body: Code::Empty,
        }
    }

    pub fn access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    pub fn conforms_to(mut self, protocol: impl Into<String>) -> Self {
        self.protocols.push(protocol.into());
        self
    }

    pub fn case(mut self, case: RawValueCase) -> Self {
        self.cases.push(case);
        self
    }

    pub fn cases(mut self, cases: impl IntoIterator<Item = RawValueCase>) -> Self {
        self.cases.extend(cases);
        self
    }

    pub fn body(mut self, body: impl Into<Code>) -> Self {
        self.body = body.into();
        self
    }
}

impl Renderable for RawValueEnumSpec {
    fn to_code(&self) -> Code {
        let mut header = format!(
            "{}enum {}: {}",
            self.access.prefix(),
            self.name,
            self.raw_type
        );
        for protocol in &self.protocols {
            header.push_str(", ");
            header.push_str(protocol);
        }
        header.push_str(" {");

        let cases = self.cases.iter().map(|c| Fragment::line(c.render()));
        let mut children = members(cases.collect(), &self.body);
        if children.is_empty() {
            children.push(line_break());
        }
        Fragment::group(vec![Fragment::block(header, children), end()]).into()
    }
}

/// Cases, then a blank line and the body if both are present.
fn members(cases: Vec<Fragment>, body: &Code) -> Vec<Fragment> {
    let mut children = cases;
    if !body.is_empty() {
        if !children.is_empty() {
            children.push(line_break());
        }
        children.extend(body.fragments().iter().cloned());
    }
    children
}
