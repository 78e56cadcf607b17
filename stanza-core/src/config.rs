//! Generator configuration loaded from `stanza.toml`.

use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default column after which a function signature is wrapped.
pub const DEFAULT_SIGNATURE_WIDTH: usize = 120;

/// Default column at which documentation text is wrapped.
pub const DEFAULT_DOC_WIDTH: usize = 130;

/// Widest space indentation accepted for one level.
pub const MAX_INDENT_WIDTH: usize = u8::MAX as usize;

/// Whitespace used for one level of indentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    #[default]
    Spaces,
    Tabs,
}

impl IndentStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndentStyle::Spaces => "spaces",
            IndentStyle::Tabs => "tabs",
        }
    }
}

impl fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rendering options shared by every generated file.
///
/// Every key is optional:
///
/// ```toml
/// indent = "spaces"
/// indent_width = 4
/// signature_width = 120
/// doc_width = 130
/// banner = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub indent: IndentStyle,
    pub indent_width: usize,
    pub signature_width: usize,
    pub doc_width: usize,
    pub banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: IndentStyle::Spaces,
            indent_width: 4,
            signature_width: DEFAULT_SIGNATURE_WIDTH,
            doc_width: DEFAULT_DOC_WIDTH,
            banner: true,
        }
    }
}

impl Config {
    /// Read and parse a `stanza.toml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = parse_config(&content, &path.display().to_string())?;
        tracing::trace!(?config, "Loaded config");
        Ok(config)
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "stanza.toml")
    }
}

fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(|e| Error::config(e, content, filename))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.indent == IndentStyle::Spaces && config.indent_width == 0 {
        return Err(Error::invalid_config(
            "indent_width must be at least 1 when indenting with spaces",
        ));
    }
    if config.indent == IndentStyle::Spaces && config.indent_width > MAX_INDENT_WIDTH {
        return Err(Error::invalid_config(format!(
            "indent_width must be at most {MAX_INDENT_WIDTH}, got {}",
            config.indent_width
        )));
    }
    if config.signature_width == 0 {
        return Err(Error::invalid_config("signature_width must be at least 1"));
    }
    if config.doc_width == 0 {
        return Err(Error::invalid_config("doc_width must be at least 1"));
    }
    Ok(())
}
