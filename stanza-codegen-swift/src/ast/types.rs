//! Small value types shared by the Swift builders.

use std::fmt;

use stanza_codegen::Parameter;

/// Swift access level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Access {
    Open,
    Public,
    /// Swift's default; rendered as no keyword.
    #[default]
    Internal,
    FilePrivate,
    Private,
}

impl Access {
    pub fn as_str(&self) -> &'static str {
        match self {
            Access::Open => "open",
            Access::Public => "public",
            Access::Internal => "internal",
            Access::FilePrivate => "fileprivate",
            Access::Private => "private",
        }
    }

    /// The keyword followed by a space, or nothing for `internal`.
    pub(crate) fn prefix(&self) -> String {
        match self {
            Access::Internal => String::new(),
            other => format!("{} ", other.as_str()),
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of nominal type declared by a [`TypeSpec`](super::TypeSpec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Class,
    Enum,
    Struct,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Class => "class",
            DataType::Enum => "enum",
            DataType::Struct => "struct",
        }
    }
}

/// A function or initializer argument, rendered as `name: Type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub ty: String,
}

impl Argument {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Documentation entry for this argument.
    pub fn as_parameter(&self, documentation: impl Into<String>) -> Parameter {
        Parameter::new(self.name.clone(), documentation)
    }

    pub fn render(&self) -> String {
        format!("{}: {}", self.name, self.ty)
    }
}

/// Join arguments as they appear between parentheses.
pub(crate) fn join_arguments(arguments: &[Argument]) -> String {
    arguments
        .iter()
        .map(Argument::render)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_prefix() {
        assert_eq!(Access::Internal.prefix(), "");
        assert_eq!(Access::Public.prefix(), "public ");
        assert_eq!(Access::FilePrivate.prefix(), "fileprivate ");
        assert_eq!(Access::default(), Access::Internal);
    }

    #[test]
    fn test_argument() {
        let arg = Argument::new("with changes", "(inout Self) throws -> Void");
        assert_eq!(arg.render(), "with changes: (inout Self) throws -> Void");
        assert_eq!(
            arg.as_parameter("the mutation").render(),
            "   - with changes: the mutation"
        );
    }

    #[test]
    fn test_join_arguments() {
        let args = [Argument::new("a", "Int"), Argument::new("b", "String")];
        assert_eq!(join_arguments(&args), "a: Int, b: String");
        assert_eq!(join_arguments(&[]), "");
    }
}
