//! Indentation renderer for fragment trees.

use stanza_core::{Config, DEFAULT_DOC_WIDTH};

use super::{Code, Fragment, Indent, Renderable};

/// Turns fragment trees into indented text.
///
/// Rendering is a pure walk: the depth of each fragment is passed down
/// explicitly, so the tree is never modified and rendering the same tree
/// twice gives the same output.
///
/// # Example
///
/// ```
/// use stanza_codegen::builder::{Fragment, Indent, Renderer};
///
/// let code = vec![
///     Fragment::block("if x == 0 {", Fragment::line("print(x)")),
///     Fragment::line("}"),
/// ];
///
/// let text = Renderer::new(Indent::Spaces(4)).render_code(&code.into());
/// assert_eq!(text, "if x == 0 {\n    print(x)\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct Renderer {
    unit: String,
    doc_width: usize,
}

impl Renderer {
    /// Create a renderer with the given indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            unit: indent.unit(),
            doc_width: DEFAULT_DOC_WIDTH,
        }
    }

    /// Create a renderer with 4-space indentation.
    pub fn swift() -> Self {
        Self::new(Indent::SWIFT)
    }

    /// Create a renderer from `stanza.toml` settings.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Indent::from(config)).doc_width(config.doc_width)
    }

    /// Set the column documentation text is wrapped at.
    pub fn doc_width(mut self, width: usize) -> Self {
        self.doc_width = width;
        self
    }

    /// The string for one indent level.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Render a fragment at the top level.
    pub fn render(&self, fragment: &Fragment) -> String {
        self.render_at(fragment, 0)
    }

    /// Render a fragment as if it sat inside `depth` enclosing blocks.
    pub fn render_at(&self, fragment: &Fragment, depth: usize) -> String {
        let mut out = String::new();
        self.write(&mut out, fragment, depth);
        out
    }

    /// Render every fragment of `code` at the top level, in order.
    pub fn render_code(&self, code: &Code) -> String {
        let mut out = String::new();
        for fragment in code.fragments() {
            self.write(&mut out, fragment, 0);
        }
        out
    }

    /// Render any [`Renderable`] node at the top level.
    pub fn emit(&self, node: &impl Renderable) -> String {
        self.render_code(&node.to_code())
    }

    fn write(&self, out: &mut String, fragment: &Fragment, depth: usize) {
        match fragment {
            Fragment::Line(content) => self.write_line(out, content, depth),
            Fragment::Block { content, children } => {
                self.write_line(out, content, depth);
                for child in children {
                    self.write(out, child, depth + 1);
                }
            }
            Fragment::Group(children) => {
                for child in children {
                    self.write(out, child, depth);
                }
            }
            Fragment::Doc(doc) => {
                for line in doc.lines(self.doc_width) {
                    self.write_line(out, &line, depth);
                }
            }
        }
    }

    /// Whitespace-only lines are written as-is so blank lines carry no indent.
    fn write_line(&self, out: &mut String, content: &str, depth: usize) {
        if !content.trim().is_empty() {
            for _ in 0..depth {
                out.push_str(&self.unit);
            }
        }
        out.push_str(content);
        out.push('\n');
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::swift()
    }
}
