//! Helpers for assembling [`Code`] from optional and repeated parts.
//!
//! These take the place of builder closures: every helper returns a plain
//! `Code` value, so they nest freely inside [`code!`](crate::code) lists.

use super::{Code, Fragment};

/// Flatten any number of parts into one sequence.
pub fn concat<C: Into<Code>>(parts: impl IntoIterator<Item = C>) -> Code {
    Code::concat(parts.into_iter().map(Into::into))
}

/// Include the output of `f` only if `condition` holds.
pub fn when<C: Into<Code>>(condition: bool, f: impl FnOnce() -> C) -> Code {
    if condition { f().into() } else { Code::Empty }
}

/// Include the output of `f` for a present value.
pub fn when_some<T, C: Into<Code>>(value: Option<T>, f: impl FnOnce(T) -> C) -> Code {
    value.map_or(Code::Empty, |value| f(value).into())
}

/// Pick one of two branches.
pub fn either<A: Into<Code>, B: Into<Code>>(
    condition: bool,
    first: impl FnOnce() -> A,
    second: impl FnOnce() -> B,
) -> Code {
    if condition {
        first().into()
    } else {
        second().into()
    }
}

/// Apply `f` to every item and concatenate the results.
pub fn for_each<T, C: Into<Code>>(
    items: impl IntoIterator<Item = T>,
    f: impl FnMut(T) -> C,
) -> Code {
    Code::concat(items.into_iter().map(f).map(Into::into))
}

/// Like [`for_each`], with a blank line between consecutive items.
pub fn for_each_separated<T, C: Into<Code>>(
    items: impl IntoIterator<Item = T>,
    mut f: impl FnMut(T) -> C,
) -> Code {
    let mut parts = Vec::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            parts.push(Code::from(Fragment::line("")));
        }
        parts.push(f(item).into());
    }
    Code::concat(parts)
}

/// Build a [`Code`] sequence from a list of values convertible into it.
///
/// ```
/// use stanza_codegen::{code, builder::{Fragment, when}};
///
/// let verbose = false;
/// let body = code![
///     Fragment::line("let x = 1"),
///     when(verbose, || Fragment::line("print(x)")),
///     vec![Fragment::line("return x")],
/// ];
/// assert_eq!(body.render(), "let x = 1\nreturn x\n");
/// ```
#[macro_export]
macro_rules! code {
    () => {
        $crate::builder::Code::Fragments(::std::vec::Vec::new())
    };
    ($($part:expr),+ $(,)?) => {
        $crate::builder::Code::concat([$($crate::builder::Code::from($part)),+])
    };
}
