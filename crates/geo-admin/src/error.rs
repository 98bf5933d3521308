//! Error types for the admin surface

use geo_security::{ConfigError, SecurityError};
use thiserror::Error;

/// Admin surface error types.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The requested style does not exist
    #[error("Style not found: {0}")]
    StyleNotFound(String),

    /// Security configuration is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Loading security rules failed
    #[error(transparent)]
    Security(#[from] SecurityError),
}

/// Result type for admin surface operations.
pub type AdminResult<T> = Result<T, AdminError>;

impl AdminError {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AdminError::StyleNotFound(_) => 404,
            AdminError::Config(_) | AdminError::Security(_) => 500,
        }
    }
}
