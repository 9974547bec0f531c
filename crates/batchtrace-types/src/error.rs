use std::fmt;

/// Result type for batchtrace-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading trace data at the boundary
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Input document could not be decoded.
    /// `line` is set for line-delimited inputs (1-based).
    Json {
        line: Option<usize>,
        source: serde_json::Error,
    },

    /// One element of an event list could not be decoded (0-based index)
    Event {
        index: usize,
        source: serde_json::Error,
    },

    /// Batch tree nests deeper than the supported number of levels
    TooDeep { limit: usize },

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json {
                line: Some(line),
                source,
            } => write!(f, "JSON error on line {}: {}", line, source),
            Error::Json { line: None, source } => write!(f, "JSON error: {}", source),
            Error::Event { index, source } => {
                write!(f, "JSON error in event {}: {}", index, source)
            }
            Error::TooDeep { limit } => {
                write!(f, "batch tree is nested deeper than {} levels", limit)
            }
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json { source, .. } | Error::Event { source, .. } => Some(source),
            Error::TooDeep { .. } | Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            line: None,
            source: err,
        }
    }
}
