//! SwiftFile abstraction for whole-file generation.
//!
//! Collects imports and top-level declarations, renders them with the
//! indentation from [`Config`] and writes `<name>.swift` through
//! [`GeneratedFile`].

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use stanza_codegen::{Code, Renderable, Renderer};
use stanza_core::{Config, FileRules, GeneratedFile, Overwrite, banner, banner_today};

/// A structured representation of a Swift source file.
///
/// # Example
///
/// ```
/// use stanza_codegen_swift::{StoredProperty, SwiftFile, TypeSpec};
///
/// let file = SwiftFile::new("Point")
///     .import("Foundation")
///     .add(TypeSpec::struct_("Point").body(StoredProperty::new("x", "Int").render()));
///
/// assert_eq!(
///     file.render(),
///     "import Foundation\n\nstruct Point {\n    let x: Int\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SwiftFile {
    name: String,
    imports: Vec<String>,
    body: Vec<Code>,
    config: Config,
    date: Option<NaiveDate>,
    overwrite: Overwrite,
}

impl SwiftFile {
    /// Create an empty file; `name` becomes `<name>.swift`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            imports: Vec::new(),
            body: Vec::new(),
            config: Config::default(),
            date: None,
            overwrite: Overwrite::Always,
        }
    }

    /// Use settings loaded from `stanza.toml`.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Stamp the banner with a fixed date instead of today's.
    pub fn dated(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Only create the file if it does not exist yet.
    pub fn keep_existing(mut self) -> Self {
        self.overwrite = Overwrite::IfMissing;
        self
    }

    /// Add an `import Module` line.
    pub fn import(mut self, module: impl Into<String>) -> Self {
        self.imports.push(module.into());
        self
    }

    /// Add a top-level declaration.
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, node: impl Renderable) -> Self {
        self.body.push(node.to_code());
        self
    }

    /// Add several top-level declarations.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        self.body.extend(nodes.into_iter().map(|node| node.to_code()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.iter().all(Code::is_empty)
    }

    /// The banner line, or `None` when disabled in the config.
    pub fn header(&self) -> Option<String> {
        if !self.config.banner {
            return None;
        }
        Some(self.date.map_or_else(banner_today, banner))
    }

    /// Render imports and declarations, separated by blank lines.
    pub fn render(&self) -> String {
        let renderer = Renderer::from_config(&self.config);
        let mut sections = Vec::new();

        if !self.imports.is_empty() {
            let imports: String = self
                .imports
                .iter()
                .map(|module| format!("import {module}\n"))
                .collect();
            sections.push(imports);
        }
        sections.extend(
            self.body
                .iter()
                .filter(|code| !code.is_empty())
                .map(|code| renderer.render_code(code)),
        );

        sections.join("\n")
    }
}

impl GeneratedFile for SwiftFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.swift", self.name))
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
            header: self.header(),
        }
    }

    fn render(&self) -> String {
        SwiftFile::render(self)
    }
}
