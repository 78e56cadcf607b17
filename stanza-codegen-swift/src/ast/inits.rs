//! Initializer builder.

use stanza_codegen::{Code, Documentation, Fragment, Renderable};
use stanza_core::{Config, DEFAULT_SIGNATURE_WIDTH};

use super::signature::Signature;
use super::types::{Access, Argument};
use crate::helpers::{end, statement};

/// Builder for `init` declarations.
///
/// Long signatures wrap the same way as [`FunctionSpec`](super::FunctionSpec)
/// signatures do.
#[derive(Debug, Clone)]
pub struct InitializerSpec {
    doc: Option<Documentation>,
    access: Access,
    arguments: Vec<Argument>,
    throws: bool,
    body: Code,
    wrap_width: usize,
}

impl InitializerSpec {
    pub fn new() -> Self {
        Self {
            doc: None,
            access: Access::Internal,
            arguments: Vec::new(),
            throws: false,
            body: Code::Empty,
            wrap_width: DEFAULT_SIGNATURE_WIDTH,
        }
    }

    /// An initializer whose body copies every argument into the property of
    /// the same name.
    pub fn assigning(arguments: impl IntoIterator<Item = Argument>) -> Self {
        let arguments: Vec<Argument> = arguments.into_iter().collect();
        let body: Code = arguments
            .iter()
            .map(|arg| statement(format!("self.{0} = {0}", arg.name)))
            .collect();
        Self {
            arguments,
            body,
            ..Self::new()
        }
    }

    pub fn doc(mut self, doc: Documentation) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    pub fn argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn arguments(mut self, arguments: impl IntoIterator<Item = Argument>) -> Self {
        self.arguments.extend(arguments);
        self
    }

    pub fn throws(mut self) -> Self {
        self.throws = true;
        self
    }

    /// Replace the body.
    pub fn body(mut self, body: impl Into<Code>) -> Self {
        self.body = body.into();
        self
    }

    /// Column after which the signature is wrapped.
    pub fn wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    /// Take the wrap width from `stanza.toml` settings.
    pub fn config(self, config: &Config) -> Self {
        self.wrap_width(config.signature_width)
    }
}

impl Default for InitializerSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderable for InitializerSpec {
    fn to_code(&self) -> Code {
        let signature = Signature {
            head: format!("{}init(", self.access.prefix()),
            arguments: &self.arguments,
            tail: if self.throws { " throws {" } else { " {" }.to_string(),
        };

        let mut fragments: Vec<Fragment> =
            self.doc.clone().map(Fragment::Doc).into_iter().collect();
        fragments.extend(signature.open(self.body.clone(), self.wrap_width));
        fragments.push(end());
        Fragment::group(fragments).into()
    }
}

#[cfg(test)]
mod tests {
    use stanza_codegen::{Parameter, Renderer};

    use super::*;

    #[test]
    fn test_empty_initializer() {
        assert_eq!(Renderer::swift().emit(&InitializerSpec::new()), "init() {\n}\n");
    }

    #[test]
    fn test_throwing_initializer_with_doc() {
        let spec = InitializerSpec::new()
            .access(Access::Public)
            .doc(
                Documentation::new("Loads from disk")
                    .parameter(Parameter::new("url", "file location")),
            )
            .argument(Argument::new("url", "URL"))
            .throws()
            .body(statement("self.data = try Data(contentsOf: url)"));
        assert_eq!(
            Renderer::swift().emit(&spec),
            "/// Loads from disk\n/// - parameters:\n///    - url: file location\npublic init(url: URL) throws {\n    self.data = try Data(contentsOf: url)\n}\n"
        );
    }

    #[test]
    fn test_assigning_initializer() {
        let spec = InitializerSpec::assigning([
            Argument::new("name", "String"),
            Argument::new("age", "Int"),
        ])
        .access(Access::Public);
        assert_eq!(
            Renderer::swift().emit(&spec),
            "public init(name: String, age: Int) {\n    self.name = name\n    self.age = age\n}\n"
        );
    }

    #[test]
    fn test_long_initializer_wraps() {
        let spec = InitializerSpec::assigning(
            ["alpha", "bravo", "charlie", "delta", "echo"]
                .map(|name| Argument::new(name, "Dictionary<String, Int>")),
        )
        .throws();
        assert_eq!(
            Renderer::swift().emit(&spec),
            "init(\n    alpha: Dictionary<String, Int>,\n    bravo: Dictionary<String, Int>,\n    charlie: Dictionary<String, Int>,\n    delta: Dictionary<String, Int>,\n    echo: Dictionary<String, Int>\n) throws {\n    self.alpha = alpha\n    self.bravo = bravo\n    self.charlie = charlie\n    self.delta = delta\n    self.echo = echo\n}\n"
        );
    }

    #[test]
    fn test_initializer_wrap_width_from_config() {
        let config: Config = "signature_width = 200".parse().unwrap();
        let spec = InitializerSpec::new()
            .arguments(
                ["alpha", "bravo", "charlie", "delta", "echo"]
                    .map(|name| Argument::new(name, "Dictionary<String, Int>")),
            )
            .config(&config);
        assert_eq!(Renderer::swift().emit(&spec).lines().count(), 2);
    }
}
