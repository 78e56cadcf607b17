//! Signatures shared by functions and initializers.

use stanza_codegen::{Code, Fragment};

use super::types::{Argument, join_arguments};

/// A declaration line split around its argument list.
pub(crate) struct Signature<'a> {
    /// Everything up to and including the opening parenthesis.
    pub head: String,
    pub arguments: &'a [Argument],
    /// Everything after the closing parenthesis, ending with the open brace.
    pub tail: String,
}

impl Signature<'_> {
    /// The signature on one line.
    pub fn line(&self) -> String {
        format!("{}{}){}", self.head, join_arguments(self.arguments), self.tail)
    }

    /// The opening block holding `body`; the closing brace is left out.
    ///
    /// A line longer than `wrap_width` with at least two arguments is
    /// split into one argument per line.
    pub fn open(&self, body: Code, wrap_width: usize) -> Vec<Fragment> {
        let line = self.line();
        match self.arguments.split_last() {
            Some((last, rest)) if line.chars().count() > wrap_width && !rest.is_empty() => {
                tracing::trace!(signature = %self.head, "Wrapping long signature");
                let mut arguments: Vec<Fragment> = rest
                    .iter()
                    .map(|arg| Fragment::line(format!("{},", arg.render())))
                    .collect();
                arguments.push(Fragment::line(last.render()));

                vec![
                    Fragment::block(self.head.clone(), arguments),
                    Fragment::block(format!("){}", self.tail), body),
                ]
            }
            _ => vec![Fragment::block(line, body)],
        }
    }
}
