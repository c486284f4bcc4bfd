//! Error types for this crate.
//!
//! All fallible operations return [`Result<T>`] which uses [`PipelineError`] as the error type.

use thiserror::Error;

/// A [`Result`](std::result::Result) alias using [`PipelineError`] as the error type.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// The unified error type for all crate errors.
///
/// # Example
///
/// ```rust,no_run
/// use sentiment_pipeline::error::PipelineError;
///
/// fn handle_error(e: PipelineError) {
///     match &e {
///         PipelineError::Artifact(_) => {
///             // Vectorizer or classifier file missing/corrupt - re-export artifacts
///         }
///         PipelineError::Resource(_) => {
///             // Stopword/lemma resource unreadable - check the resource directory
///         }
///         PipelineError::TableParse(_) => {
///             // Malformed upload - report to the user, keep serving
///         }
///         PipelineError::Device(_) => {
///             // GPU unavailable - fall back to CPU
///         }
///         PipelineError::Unexpected(_) => {
///             // Internal error - report bug
///             eprintln!("Internal error: {e}");
///         }
///         _ => eprintln!("Error: {e}"),
///     }
/// }
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PipelineError {
    /// Missing, corrupt, or shape-incompatible artifact file. Fatal at build time.
    #[error("{0}")]
    Artifact(String),

    /// Stopword list or lemma dictionary failure. Fatal at build time.
    #[error("{0}")]
    Resource(String),

    /// Malformed tabular upload. Fix the file and retry.
    #[error("{0}")]
    TableParse(String),

    /// Device initialization failure. Fall back to CPU.
    #[error("{0}")]
    Device(String),

    /// Internal error. Report if seen.
    #[error("{0}")]
    Unexpected(String),
}

impl From<candle_core::Error> for PipelineError {
    fn from(value: candle_core::Error) -> Self {
        PipelineError::Unexpected(value.to_string())
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(value: std::io::Error) -> Self {
        PipelineError::Unexpected(value.to_string())
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(value: serde_json::Error) -> Self {
        PipelineError::Unexpected(value.to_string())
    }
}

impl From<csv::Error> for PipelineError {
    fn from(value: csv::Error) -> Self {
        PipelineError::TableParse(value.to_string())
    }
}
