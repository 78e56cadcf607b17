//! Core types for the stanza source generator.
//!
//! This crate holds what every other stanza crate shares: the error type,
//! the `stanza.toml` configuration and generated-file output.

mod config;
mod error;
mod file;

// Configuration
pub use config::{
    Config, DEFAULT_DOC_WIDTH, DEFAULT_SIGNATURE_WIDTH, IndentStyle, MAX_INDENT_WIDTH,
};
// Errors
pub use error::{Error, Result};
// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult, banner, banner_today};
