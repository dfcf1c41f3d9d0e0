use thiserror::Error;

/// Classifies rule source failures for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// No source was configured (nil source)
    NotConfigured,
    /// File open/read failure
    FileError,
    /// Data is not valid UTF-8 text
    InvalidData,
}

/// Public suffix engine error types
#[derive(Error, Debug)]
pub enum PslError {
    #[error("Rule source unavailable: {message}")]
    SourceUnavailable {
        kind: SourceErrorKind,
        message: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, PslError>;
