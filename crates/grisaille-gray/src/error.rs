//! Error types for grisaille-gray

use thiserror::Error;

/// Errors that can occur during gray conversion
#[derive(Debug, Error)]
pub enum GrayError {
    /// Core container error
    #[error("core error: {0}")]
    Core(#[from] grisaille_core::Error),

    /// Unrecognized gray method selector
    #[error("unknown gray method: {0:?} (expected one of average, highest, upper_average, middle_average)")]
    UnknownMethod(String),
}

/// Result type for gray conversion operations
pub type GrayResult<T> = Result<T, GrayError>;
