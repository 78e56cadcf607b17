//! Stored and computed properties.

use stanza_codegen::{Code, Fragment, Renderable};

use super::types::{Access, Argument};
use crate::helpers::end;

/// A stored property, e.g. `public var count: Int = 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredProperty {
    pub access: Access,
    pub mutable: bool,
    pub name: String,
    pub ty: String,
    pub value: Option<String>,
}

impl StoredProperty {
    /// An immutable (`let`) property.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            access: Access::Internal,
            mutable: false,
            name: name.into(),
            ty: ty.into(),
            value: None,
        }
    }

    pub fn access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    /// Declare with `var` instead of `let`.
    pub fn mutable(mut self) -> Self {
        self.mutable = true;
        self
    }

    /// Initial value expression.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// The initializer argument that would set this property.
    pub fn as_argument(&self) -> Argument {
        Argument::new(self.name.clone(), self.ty.clone())
    }

    pub fn render(&self) -> Fragment {
        let keyword = if self.mutable { "var" } else { "let" };
        let mut line = format!(
            "{}{} {}: {}",
            self.access.prefix(),
            keyword,
            self.name,
            self.ty
        );
        if let Some(value) = &self.value {
            line.push_str(" = ");
            line.push_str(value);
        }
        Fragment::line(line)
    }
}

impl Renderable for StoredProperty {
    fn to_code(&self) -> Code {
        self.render().into()
    }
}

/// A read-only computed property with a getter body.
#[derive(Debug, Clone)]
pub struct ComputedPropertySpec {
    name: String,
    ty: String,
    access: Access,
    is_static: bool,
    body: Code,
}

impl ComputedPropertySpec {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            access: Access::Internal,
            is_static: false,
            body: Code::Empty,
        }
    }

    pub fn access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn body(mut self, body: impl Into<Code>) -> Self {
        self.body = body.into();
        self
    }
}

impl Renderable for ComputedPropertySpec {
    fn to_code(&self) -> Code {
        let header = format!(
            "{}{}var {}: {} {{",
            self.access.prefix(),
            if self.is_static { "static " } else { "" },
            self.name,
            self.ty
        );
        Fragment::group(vec![Fragment::block(header, self.body.clone()), end()]).into()
    }
}
