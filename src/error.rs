// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShortpathError {
    /// A record did not parse into `(label, weight, label)`.
    #[error("Malformed input in record {record}: {reason}")]
    MalformedInput { record: usize, reason: String },

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ShortpathError>;

impl ShortpathError {
    pub(crate) fn malformed(record: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            record,
            reason: reason.into(),
        }
    }
}

// Allow `?` on std::io::Error by converting to ShortpathError::Io with unknown path.
impl From<std::io::Error> for ShortpathError {
    fn from(source: std::io::Error) -> Self {
        ShortpathError::Io {
            source,
            path: PathBuf::from("<stdin>"),
        }
    }
}

impl From<toml::de::Error> for ShortpathError {
    fn from(e: toml::de::Error) -> Self {
        ShortpathError::Config(e.to_string())
    }
}
