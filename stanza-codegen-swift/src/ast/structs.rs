//! Swift nominal type builder.

use stanza_codegen::{Code, Documentation, Fragment, Renderable};

use super::types::{Access, DataType};
use crate::helpers::end;

/// Builder for a class, struct or enum declaration with a free-form body.
///
/// Enums with cases are better served by [`EnumSpec`](super::EnumSpec).
#[derive(Debug, Clone)]
pub struct TypeSpec {
    name: String,
    kind: DataType,
    doc: Option<Documentation>,
    access: Access,
    parents: Vec<String>,
    body: Code,
}

impl TypeSpec {
    pub fn new(name: impl Into<String>, kind: DataType) -> Self {
        Self {
            name: name.into(),
            kind,
            doc: None,
            access: Access::Internal,
            parents: Vec::new(),
            body: Code::Empty,
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, DataType::Class)
    }

    pub fn struct_(name: impl Into<String>) -> Self {
        Self::new(name, DataType::Struct)
    }

    pub fn doc(mut self, doc: Documentation) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    /// Superclass or protocol, in declaration order.
    pub fn inherits(mut self, parent: impl Into<String>) -> Self {
        self.parents.push(parent.into());
        self
    }

    pub fn body(mut self, body: impl Into<Code>) -> Self {
        self.body = body.into();
        self
    }

    /// The opening line, e.g. `public struct Point: Equatable {`.
    pub fn header(&self) -> String {
        let mut header = format!(
            "{}{} {}",
            self.access.prefix(),
            self.kind.as_str(),
            self.name
        );
        if !self.parents.is_empty() {
            header.push_str(": ");
            header.push_str(&self.parents.join(", "));
        }
        header.push_str(" {");
        header
    }
}

impl Renderable for TypeSpec {
    fn to_code(&self) -> Code {
        let mut fragments: Vec<Fragment> =
            self.doc.clone().map(Fragment::Doc).into_iter().collect();
        fragments.push(Fragment::block(self.header(), self.body.clone()));
        fragments.push(end());
        Fragment::group(fragments).into()
    }
}

#[cfg(test)]
mod tests {
    use stanza_codegen::Renderer;

    use super::*;
    use crate::ast::StoredProperty;

    #[test]
    fn test_empty_class() {
        let spec = TypeSpec::class("Cache").access(Access::Open);
        assert_eq!(Renderer::swift().emit(&spec), "open class Cache {\n}\n");
    }

    #[test]
    fn test_struct_with_parents_and_body() {
        let spec = TypeSpec::struct_("Point")
            .access(Access::Public)
            .inherits("Equatable")
            .inherits("Sendable")
            .body(vec![
                StoredProperty::new("x", "Int").render(),
                StoredProperty::new("y", "Int").render(),
            ]);
        assert_eq!(
            Renderer::swift().emit(&spec),
            "public struct Point: Equatable, Sendable {\n    let x: Int\n    let y: Int\n}\n"
        );
    }

    #[test]
    fn test_documented_enum_kind() {
        let spec = TypeSpec::new("Namespace", DataType::Enum).doc(Documentation::new("Constants"));
        assert_eq!(
            Renderer::swift().emit(&spec),
            "/// Constants\nenum Namespace {\n}\n"
        );
    }
}
