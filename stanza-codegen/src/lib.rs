//! Fragment model and indentation renderer for stanza.
//!
//! Generated source is assembled as a tree of [`Fragment`]s, collected into
//! [`Code`] values and turned into text by a [`Renderer`]. Language-specific
//! templates live in other crates (e.g., `stanza-codegen-swift`) and only
//! produce fragments.
//!
//! # Module Organization
//!
//! - [`builder`] - Fragments, code sequences, rendering and documentation

pub mod builder;

pub use builder::{
    Code, DocFormat, Documentation, Fragment, Indent, Parameter, Renderable, Renderer,
};
