use std::path::PathBuf;

use thiserror::Error;

/// Errors from knowledge-base loading and output writing.
///
/// Load failures are fatal for the build: no partial knowledge base is
/// ever produced. Malformed individual records are not errors; they are
/// skipped and logged by the builder.
#[derive(Debug, Error)]
pub enum KbError {
    #[error("failed to read knowledge base file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse knowledge base file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write output file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize {what}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, KbError>;
