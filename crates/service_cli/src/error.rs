//! CLI error types.

use thiserror::Error;

/// Errors surfaced by the CLI.
///
/// Engine-layer failures are wrapped rather than re-stated, so the
/// message a user sees names the offending parameter the same way the
/// engine does.
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument failed CLI-level validation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Market parameters were rejected by the model layer.
    #[error("Model error: {0}")]
    Model(#[from] vanilla_model::ModelError),

    /// A curve sweep failed.
    #[error("Curve error: {0}")]
    Curve(#[from] vanilla_curves::CurveError),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV output failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
