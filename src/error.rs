//! Error types for term modeling, parsing, hashing, and the CLI surface.

use thiserror::Error;

/// Errors raised while constructing terms and quads
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TermError {
    #[error("{kind} is not allowed in {position} position")]
    InvalidPosition {
        position: &'static str,
        kind: &'static str,
    },

    #[error("Invalid language tag: {0:?}")]
    InvalidLanguage(String),

    #[error("rdf:langString literal requires a language tag")]
    MissingLanguage,

    #[error("Blank node label must not be empty")]
    EmptyBlankLabel,

    #[error("Invalid blank node label: {0:?}")]
    InvalidBlankLabel(String),
}

/// Errors raised while parsing N-Triples / N-Quads text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("line {line}: {source}")]
    Term {
        line: usize,
        #[source]
        source: TermError,
    },
}

impl ParseError {
    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        ParseError::Syntax {
            line,
            message: message.into(),
        }
    }

    /// 1-based line the error was reported on
    pub fn line(&self) -> usize {
        match self {
            ParseError::Syntax { line, .. } | ParseError::Term { line, .. } => *line,
        }
    }
}

/// Errors raised while building a hasher from configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashError {
    #[error("Invalid hash key: {0}")]
    InvalidKey(String),

    #[error("A hash key was given but algorithm 'identity' does not use one")]
    KeyWithoutDigest,
}

/// Top-level error returned by the CLI and config layers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Term(#[from] TermError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Hash error: {0}")]
    Hash(#[from] HashError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ApiError {
    fn from(err: toml::ser::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}
