//! The [`Code`] union: zero, one or many fragments behind one type.

use super::{Fragment, Indent, Renderer};

/// Uniform value returned by every template and builder.
///
/// Equality compares the rendered text of the contained fragments one by
/// one, so the variant used to hold them does not matter.
#[derive(Debug, Clone, Default)]
pub enum Code {
    /// A single fragment.
    Fragment(Fragment),
    /// Several fragments in order.
    Fragments(Vec<Fragment>),
    /// Nothing.
    #[default]
    Empty,
}

impl Code {
    /// Flatten a sequence of code values into one.
    pub fn concat(parts: impl IntoIterator<Item = Code>) -> Self {
        Self::Fragments(parts.into_iter().flat_map(Code::into_fragments).collect())
    }

    /// The contained fragments as a slice.
    pub fn fragments(&self) -> &[Fragment] {
        match self {
            Self::Fragment(fragment) => std::slice::from_ref(fragment),
            Self::Fragments(fragments) => fragments,
            Self::Empty => &[],
        }
    }

    /// The contained fragments as an owned vector.
    pub fn into_fragments(self) -> Vec<Fragment> {
        match self {
            Self::Fragment(fragment) => vec![fragment],
            Self::Fragments(fragments) => fragments,
            Self::Empty => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fragments().is_empty()
    }

    /// Render every fragment at the top level with an empty indent unit.
    pub fn render(&self) -> String {
        Renderer::new(Indent::NONE).render_code(self)
    }

    /// Render every fragment at the top level with the given indent unit.
    pub fn render_with(&self, indent: Indent) -> String {
        Renderer::new(indent).render_code(self)
    }
}

impl PartialEq for Code {
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs) = (self.fragments(), other.fragments());
        lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(l, r)| l.render() == r.render())
    }
}

impl From<Fragment> for Code {
    fn from(fragment: Fragment) -> Self {
        Self::Fragment(fragment)
    }
}

impl From<Vec<Fragment>> for Code {
    fn from(fragments: Vec<Fragment>) -> Self {
        Self::Fragments(fragments)
    }
}

impl From<Vec<Code>> for Code {
    fn from(parts: Vec<Code>) -> Self {
        Self::concat(parts)
    }
}

impl<T: Into<Code>> From<Option<T>> for Code {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl FromIterator<Fragment> for Code {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Self::Fragments(iter.into_iter().collect())
    }
}

impl FromIterator<Code> for Code {
    fn from_iter<I: IntoIterator<Item = Code>>(iter: I) -> Self {
        Self::concat(iter)
    }
}
