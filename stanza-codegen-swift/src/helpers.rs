//! Single-line building blocks shared by every template.

use stanza_codegen::{Code, Fragment};

/// One line of Swift, emitted verbatim.
pub fn statement(s: impl Into<String>) -> Fragment {
    Fragment::line(s)
}

/// An empty separator line.
pub fn line_break() -> Fragment {
    Fragment::line("")
}

/// The closing brace of a block.
pub fn end() -> Fragment {
    Fragment::line("}")
}

/// Split pre-formatted text into lines, dropping trailing whitespace.
///
/// Relative indentation inside `text` is kept; the renderer adds the
/// indentation of wherever the result is placed.
pub fn raw(text: &str) -> Code {
    text.split('\n')
        .map(|line| Fragment::line(line.trim_end()))
        .collect()
}
