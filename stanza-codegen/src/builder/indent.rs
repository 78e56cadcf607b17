//! Indentation configuration for code generation.

use stanza_core::{Config, IndentStyle, MAX_INDENT_WIDTH};

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (Swift, Rust).
    pub const SWIFT: Self = Self::Spaces(4);

    /// No indentation at all.
    pub const NONE: Self = Self::Spaces(0);

    /// The string for one indent level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width)),
            Self::Tab => "\t".to_string(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::SWIFT
    }
}

/// Parsed configs never exceed [`MAX_INDENT_WIDTH`]; a hand-built one that
/// does is capped there.
impl From<&Config> for Indent {
    fn from(config: &Config) -> Self {
        match config.indent {
            IndentStyle::Tabs => Self::Tab,
            IndentStyle::Spaces => {
                Self::Spaces(u8::try_from(config.indent_width).unwrap_or(u8::MAX))
            }
        }
    }
}
