//! Error types for the filter engine.

use thiserror::Error;

/// Error type for filter operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Construction-time parameter validation failure.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Buffer length or dimensions rejected before any worker ran.
    #[error(transparent)]
    Dimension(#[from] chromab_core::Error),
}

/// Result type for filter operations.
pub type OpsResult<T> = Result<T, OpsError>;
