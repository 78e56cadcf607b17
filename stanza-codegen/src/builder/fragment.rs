//! Fragment tree and the Renderable trait.
//!
//! A generated file is a tree of [`Fragment`]s. Only blocks nest: each
//! [`Fragment::Block`] renders its children one indent level deeper than its
//! own content line. Groups bundle siblings without adding a level.

use super::{Code, Documentation, Indent, Renderer};

/// A renderable unit of generated text.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A content line with children nested one level deeper.
    ///
    /// The closing line is not generated; callers append it as a sibling.
    Block {
        content: String,
        children: Vec<Fragment>,
    },
    /// Siblings rendered at the group's own position, without a content line.
    Group(Vec<Fragment>),
    /// A documentation comment.
    Doc(Documentation),
}

impl Fragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment.
    pub fn block(content: impl Into<String>, children: impl Into<Code>) -> Self {
        Self::Block {
            content: content.into(),
            children: children.into().into_fragments(),
        }
    }

    /// Create a group fragment.
    pub fn group(children: impl Into<Code>) -> Self {
        Self::Group(children.into().into_fragments())
    }

    /// Whether this fragment lays out its own lines.
    ///
    /// Lines are indented by whoever renders them; every other kind
    /// indents its own output from the depth it is rendered at.
    pub fn is_multiline(&self) -> bool {
        !matches!(self, Self::Line(_))
    }

    /// Direct children of this fragment (empty for lines).
    pub fn children(&self) -> &[Fragment] {
        match self {
            Self::Line(_) | Self::Doc(_) => &[],
            Self::Block { children, .. } | Self::Group(children) => children,
        }
    }

    /// Render with an empty indent unit.
    pub fn render(&self) -> String {
        Renderer::new(Indent::NONE).render(self)
    }

    /// Render with the given indent unit.
    pub fn render_with(&self, indent: Indent) -> String {
        Renderer::new(indent).render(self)
    }
}

impl From<Documentation> for Fragment {
    fn from(doc: Documentation) -> Self {
        Self::Doc(doc)
    }
}

/// Trait for types that can be turned into generated code.
///
/// Implement this trait for declaration builders so they can be handed to a
/// [`Renderer`] or mixed into a [`Code`] sequence.
pub trait Renderable {
    /// Convert this node to code.
    fn to_code(&self) -> Code;
}

impl Renderable for Fragment {
    fn to_code(&self) -> Code {
        Code::Fragment(self.clone())
    }
}

impl Renderable for Code {
    fn to_code(&self) -> Code {
        self.clone()
    }
}

impl Renderable for Documentation {
    fn to_code(&self) -> Code {
        Code::Fragment(Fragment::Doc(self.clone()))
    }
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_code(&self) -> Code {
        (*self).to_code()
    }
}

/// Blanket implementation for Box.
impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_code(&self) -> Code {
        self.as_ref().to_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_constructors() {
        assert_eq!(Fragment::line("test"), Fragment::Line("test".to_string()));

        let block = Fragment::block("if true {", Fragment::line("return 1"));
        match block {
            Fragment::Block { content, children } => {
                assert_eq!(content, "if true {");
                assert_eq!(children, vec![Fragment::line("return 1")]);
            }
            _ => panic!("Expected Block variant"),
        }
    }

    #[test]
    fn test_is_multiline() {
        assert!(!Fragment::line("x").is_multiline());
        assert!(Fragment::block("x {", Code::Empty).is_multiline());
        assert!(Fragment::group(Code::Empty).is_multiline());
        assert!(Fragment::Doc(Documentation::new("x")).is_multiline());
    }

    #[test]
    fn test_line_render() {
        assert_eq!(Fragment::line("let x = 1").render(), "let x = 1\n");
    }

    #[test]
    fn test_block_without_children() {
        assert_eq!(Fragment::block("do {", Code::Empty).render(), "do {\n");
    }

    #[test]
    fn test_renderable_for_box() {
        let boxed: Box<dyn Renderable> = Box::new(Fragment::line("x"));
        assert_eq!(boxed.to_code(), Code::Fragment(Fragment::line("x")));
    }
}
