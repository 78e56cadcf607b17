use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for stanza operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("I/O error on '{path}'")]
    #[diagnostic(code(stanza::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse stanza.toml")]
    #[diagnostic(code(stanza::config_parse))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(stanza::invalid_config))]
    InvalidConfig { message: String },

    #[error("function '{function}' cannot be both throws and rethrows")]
    #[diagnostic(
        code(stanza::conflicting_keywords),
        help("keep either `throws` or `rethrows` on '{function}'")
    )]
    ConflictingKeywords { function: String },
}

impl Error {
    /// Create a config parse error from a toml error with source context
    pub fn config(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    pub fn invalid_config(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidConfig {
            message: message.into(),
        })
    }

    pub fn conflicting_keywords(function: impl Into<String>) -> Box<Self> {
        Box::new(Error::ConflictingKeywords {
            function: function.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicting_keywords_message() {
        let err = Error::conflicting_keywords("copy");
        assert_eq!(
            err.to_string(),
            "function 'copy' cannot be both throws and rethrows"
        );
    }

    #[test]
    fn test_config_error_carries_span() {
        let src = "indent = ";
        let toml_err = toml::from_str::<toml::Table>(src).unwrap_err();
        let err = Error::config(toml_err, src, "stanza.toml");
        match *err {
            Error::Config { span, .. } => assert!(span.is_some()),
            other => panic!("expected Config error, got {other:?}"),
        }
    }
}
