//! Swift function builder.

use std::collections::BTreeSet;

use stanza_codegen::{Code, Documentation, Fragment};
use stanza_core::{Config, DEFAULT_SIGNATURE_WIDTH, Error, Result};

use super::signature::Signature;
use super::types::{Access, Argument};
use crate::helpers::end;

/// Keyword placed after a function's argument list.
///
/// Declaration order is render order: `async` comes before the throwing
/// keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FunctionKeyword {
    Async,
    Throws,
    Rethrows,
}

impl FunctionKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionKeyword::Async => "async",
            FunctionKeyword::Throws => "throws",
            FunctionKeyword::Rethrows => "rethrows",
        }
    }
}

/// Builder for Swift functions.
///
/// A signature longer than the wrap width (120 columns by default) with at
/// least two arguments is split into one argument per line.
#[derive(Debug, Clone)]
pub struct FunctionSpec {
    name: String,
    doc: Option<Documentation>,
    access: Access,
    is_static: bool,
    keywords: BTreeSet<FunctionKeyword>,
    generics: Option<String>,
    arguments: Vec<Argument>,
    returns: Option<String>,
    body: Code,
    wrap_width: usize,
}

impl FunctionSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            access: Access::Internal,
            is_static: false,
            keywords: BTreeSet::new(),
            generics: None,
            arguments: Vec::new(),
            returns: None,
            body: Code::Empty,
            wrap_width: DEFAULT_SIGNATURE_WIDTH,
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

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn keyword(mut self, keyword: FunctionKeyword) -> Self {
        self.keywords.insert(keyword);
        self
    }

    pub fn async_(self) -> Self {
        self.keyword(FunctionKeyword::Async)
    }

    pub fn throws(self) -> Self {
        self.keyword(FunctionKeyword::Throws)
    }

    pub fn rethrows(self) -> Self {
        self.keyword(FunctionKeyword::Rethrows)
    }

    /// Generic parameter clause without the angle brackets, e.g. `T: Codable`.
    pub fn generics(mut self, signature: impl Into<String>) -> Self {
        self.generics = Some(signature.into());
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

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

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

    fn parts(&self) -> Signature<'_> {
        let generics = self
            .generics
            .as_ref()
            .map(|g| format!("<{g}>"))
            .unwrap_or_default();
        let keywords: String = self
            .keywords
            .iter()
            .map(|k| format!("{} ", k.as_str()))
            .collect();
        let arrow = self
            .returns
            .as_ref()
            .map(|r| format!("-> {r} "))
            .unwrap_or_default();

        Signature {
            head: format!(
                "{}{}func {}{}(",
                self.access.prefix(),
                if self.is_static { "static " } else { "" },
                self.name,
                generics
            ),
            arguments: &self.arguments,
            tail: format!(" {keywords}{arrow}{{"),
        }
    }

    /// Single-line signature, e.g. `public func run(speed: Int) async -> Bool {`.
    pub fn signature(&self) -> String {
        self.parts().line()
    }

    /// Build the function as a group of fragments.
    ///
    /// Fails if both `throws` and `rethrows` were requested.
    pub fn build(&self) -> Result<Code> {
        if self.keywords.contains(&FunctionKeyword::Throws)
            && self.keywords.contains(&FunctionKeyword::Rethrows)
        {
            return Err(Error::conflicting_keywords(&self.name));
        }

        let mut fragments: Vec<Fragment> =
            self.doc.clone().map(Fragment::Doc).into_iter().collect();

        fragments.extend(self.parts().open(self.body.clone(), self.wrap_width));
        fragments.push(end());

        Ok(Fragment::group(fragments).into())
    }
}

#[cfg(test)]
mod tests {
    use stanza_codegen::{Indent, Parameter};

    use super::*;
    use crate::helpers::statement;

    fn render(spec: &FunctionSpec) -> String {
        spec.build().unwrap().render_with(Indent::SWIFT)
    }

    #[test]
    fn test_simple_function() {
        let spec = FunctionSpec::new("testOne").body(statement("print(\"Hello, World\")"));
        assert_eq!(
            render(&spec),
            "func testOne() {\n    print(\"Hello, World\")\n}\n"
        );
    }

    #[test]
    fn test_access_and_static() {
        let spec = FunctionSpec::new("make").access(Access::Public).static_();
        assert_eq!(render(&spec), "public static func make() {\n}\n");
    }

    #[test]
    fn test_keyword_order() {
        let spec = FunctionSpec::new("testOne").throws().async_();
        assert_eq!(spec.signature(), "func testOne() async throws {");
    }

    #[test]
    fn test_rethrows_with_return() {
        let spec = FunctionSpec::new("copy")
            .access(Access::Public)
            .rethrows()
            .argument(Argument::new("with changes", "(inout Self) throws -> Void"))
            .returns("Self")
            .body(vec![
                statement("var mutableSelf = self"),
                statement("try changes(&mutableSelf)"),
                statement("return mutableSelf"),
            ]);
        assert_eq!(
            render(&spec),
            "public func copy(with changes: (inout Self) throws -> Void) rethrows -> Self {\n    var mutableSelf = self\n    try changes(&mutableSelf)\n    return mutableSelf\n}\n"
        );
    }

    #[test]
    fn test_generics() {
        let spec = FunctionSpec::new("decode")
            .generics("T: Decodable")
            .argument(Argument::new("data", "Data"))
            .throws()
            .returns("T");
        assert_eq!(
            spec.signature(),
            "func decode<T: Decodable>(data: Data) throws -> T {"
        );
    }

    #[test]
    fn test_throws_and_rethrows_conflict() {
        let err = FunctionSpec::new("testOne")
            .throws()
            .rethrows()
            .async_()
            .build()
            .unwrap_err();
        assert!(matches!(
            *err,
            Error::ConflictingKeywords { ref function } if function == "testOne"
        ));
    }

    #[test]
    fn test_long_signature_wraps() {
        let spec = FunctionSpec::new("configure")
            .arguments(
                ["alpha", "bravo", "charlie", "delta", "echo"]
                    .map(|name| Argument::new(name, "Dictionary<String, Int>")),
            )
            .returns("Bool")
            .body(statement("return true"));
        assert!(spec.signature().chars().count() > 120);

        assert_eq!(
            render(&spec),
            "func configure(\n    alpha: Dictionary<String, Int>,\n    bravo: Dictionary<String, Int>,\n    charlie: Dictionary<String, Int>,\n    delta: Dictionary<String, Int>,\n    echo: Dictionary<String, Int>\n) -> Bool {\n    return true\n}\n"
        );
    }

    #[test]
    fn test_single_long_argument_never_wraps() {
        let closure = format!("({}) -> Void", "Int, ".repeat(30));
        let spec = FunctionSpec::new("handle").argument(Argument::new("completion", closure));
        assert!(spec.signature().chars().count() > 120);
        assert_eq!(render(&spec).lines().count(), 2);
    }

    #[test]
    fn test_custom_wrap_width() {
        let spec = FunctionSpec::new("f")
            .arguments([Argument::new("a", "Int"), Argument::new("b", "Int")])
            .wrap_width(10);
        assert_eq!(render(&spec), "func f(\n    a: Int,\n    b: Int\n) {\n}\n");
    }

    #[test]
    fn test_wrap_width_from_config() {
        let config: Config = "signature_width = 10".parse().unwrap();
        let spec = FunctionSpec::new("f")
            .arguments([Argument::new("a", "Int"), Argument::new("b", "Int")])
            .config(&config);
        assert_eq!(render(&spec).lines().count(), 5);
    }

    #[test]
    fn test_doc_comes_first() {
        let spec = FunctionSpec::new("add")
            .doc(Documentation::new("Adds one").parameter(Parameter::new("x", "the input")))
            .argument(Argument::new("x", "Int"))
            .returns("Int")
            .body(statement("x + 1"));
        assert_eq!(
            render(&spec),
            "/// Adds one\n/// - parameters:\n///    - x: the input\nfunc add(x: Int) -> Int {\n    x + 1\n}\n"
        );
    }
}
