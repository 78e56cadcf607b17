//! Code generation building blocks.
//!
//! This module provides the core primitives for generating code:
//! - [`Fragment`] - A line, a block with nested children, a group or a doc comment
//! - [`Code`] - Zero, one or many fragments behind one type
//! - [`Renderer`] - Turns fragment trees into indented text
//! - [`Documentation`] - Doc comments with paragraph wrapping
//! - [`Indent`] - Indentation configuration
//!
//! # Assembling code
//!
//! - [`concat`], [`when`], [`when_some`], [`either`], [`for_each`],
//!   [`for_each_separated`] and the [`code!`](crate::code) macro

mod code;
mod combinators;
mod doc;
mod fragment;
mod indent;
mod render;

pub use code::Code;
pub use combinators::{concat, either, for_each, for_each_separated, when, when_some};
pub use doc::{DocFormat, Documentation, Parameter, wrap, wrap_lines};
pub use fragment::{Fragment, Renderable};
pub use indent::Indent;
pub use render::Renderer;
