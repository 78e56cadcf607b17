//! Documentation comments with paragraph wrapping.
//!
//! The main text of a [`Documentation`] is wrapped at a fixed column
//! (130 unless the renderer is configured otherwise). Parameter, return and
//! tag annotations follow as one line each.

use super::{Fragment, Indent, Renderer};

/// Comment style of a documentation block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocFormat {
    /// Every line prefixed with `///`.
    #[default]
    SingleLine,
    /// Enclosed in `/**` and ` */`.
    Multiline,
}

/// Documentation for one parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub documentation: String,
}

impl Parameter {
    /// Document the parameter `name` with `documentation`.
    pub fn new(name: impl Into<String>, documentation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documentation: documentation.into(),
        }
    }

    /// The line for this parameter, e.g. `   - name: text`.
    pub fn render(&self) -> String {
        format!("   - {}: {}", self.name, self.documentation)
    }
}

/// A documentation comment block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Documentation {
    text: String,
    format: DocFormat,
    parameters: Vec<Parameter>,
    returns: Option<String>,
    tag: Option<String>,
}

impl Documentation {
    /// Create single-line documentation with the given main text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: DocFormat::SingleLine,
            parameters: Vec::new(),
            returns: None,
            tag: None,
        }
    }

    /// Set the comment style.
    pub fn format(mut self, format: DocFormat) -> Self {
        self.format = format;
        self
    }

    /// Use the `/** ... */` style.
    pub fn multiline(self) -> Self {
        self.format(DocFormat::Multiline)
    }

    /// Add a line below `- parameters:`.
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Add several parameters, in order.
    pub fn parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    /// Describe the return value.
    pub fn returns(mut self, text: impl Into<String>) -> Self {
        self.returns = Some(text.into());
        self
    }

    /// Set the `- Tag:` annotation, emitted last.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// The unwrapped main text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn doc_format(&self) -> DocFormat {
        self.format
    }

    /// Annotation lines below the main text, one fragment per line.
    pub fn children(&self) -> Vec<Fragment> {
        let mut children = Vec::new();
        if !self.parameters.is_empty() {
            children.push(Fragment::line("- parameters:"));
            children.extend(self.parameters.iter().map(|p| Fragment::line(p.render())));
        }
        if let Some(returns) = &self.returns {
            children.push(Fragment::line(format!("- returns: {returns}")));
        }
        if let Some(tag) = &self.tag {
            children.push(Fragment::line(format!("- Tag: {tag}")));
        }
        children
    }

    /// The comment lines, without indentation or trailing newlines.
    pub fn lines(&self, width: usize) -> Vec<String> {
        let text = wrap_lines(&self.text, width);
        let annotations: Vec<String> = self
            .children()
            .iter()
            .flat_map(|child| {
                child
                    .render()
                    .lines()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();

        match self.format {
            DocFormat::SingleLine => text
                .into_iter()
                .chain(annotations.iter().map(String::as_str))
                .map(|line| marked("///", line))
                .collect(),
            DocFormat::Multiline => {
                let mut lines = vec!["/**".to_string()];
                lines.extend(text.into_iter().map(|line| marked("", line)));
                lines.extend(annotations.iter().map(|line| marked("", line)));
                lines.push(" */".to_string());
                lines
            }
        }
    }

    /// Render at the top level with the default wrap width.
    pub fn render(&self) -> String {
        Renderer::new(Indent::NONE).render(&Fragment::Doc(self.clone()))
    }
}

/// `marker` followed by a space and `line`; no trailing space for blank lines.
fn marked(marker: &str, line: &str) -> String {
    if line.trim().is_empty() {
        marker.to_string()
    } else {
        format!("{marker} {line}")
    }
}

/// Split `text` after the word that reaches column `width`.
///
/// Text of `width` characters or fewer is returned whole with no remainder.
/// If the character at `width` is whitespace the split happens there.
/// Otherwise the word running through that column stays on the head line
/// and the split happens at the end of that word, so a head line can exceed
/// `width` by up to one word. The separating character is dropped.
///
/// Longer text always has a remainder. It is empty when the boundary word
/// ends the text, which yields a final blank comment line.
pub fn wrap(text: &str, width: usize) -> (&str, Option<&str>) {
    let Some((index, ch)) = text.char_indices().nth(width) else {
        return (text, None);
    };

    let end = if ch.is_whitespace() {
        index
    } else {
        text[index..]
            .find(' ')
            .map_or(text.len(), |offset| index + offset)
    };

    let head = &text[..end];
    let rest = text[end..]
        .chars()
        .next()
        .map_or("", |separator| &text[end + separator.len_utf8()..]);
    (head, Some(rest))
}

/// Repeatedly [`wrap`] `text` until nothing is left.
///
/// Always yields at least one line, which is empty for empty input.
pub fn wrap_lines(text: &str, width: usize) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = Some(text);
    while let Some(current) = rest {
        let (head, remainder) = wrap(current, width);
        lines.push(head);
        rest = remainder;
    }
    lines
}
