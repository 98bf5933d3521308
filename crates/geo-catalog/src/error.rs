//! Error types for catalog operations
//!
//! Lookups never fail; they return `Option`. Only mutations of the
//! catalog produce these errors.

use thiserror::Error;

/// Catalog error types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A workspace with this name already exists
    #[error("Workspace already exists: {0}")]
    DuplicateWorkspace(String),

    /// The style references a workspace the catalog does not know
    #[error("Unknown workspace: {0}")]
    UnknownWorkspace(String),

    /// A style with this name already exists in the same scope
    #[error("Style already exists: {0}")]
    DuplicateStyle(String),

    /// No style with this name exists in the requested scope
    #[error("Style not found: {0}")]
    StyleNotFound(String),

    /// Names must be non-empty
    #[error("Invalid name: {0}")]
    InvalidName(String),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::DuplicateWorkspace(_) => "DUPLICATE_WORKSPACE",
            CatalogError::UnknownWorkspace(_) => "UNKNOWN_WORKSPACE",
            CatalogError::DuplicateStyle(_) => "DUPLICATE_STYLE",
            CatalogError::StyleNotFound(_) => "STYLE_NOT_FOUND",
            CatalogError::InvalidName(_) => "INVALID_NAME",
        }
    }
}
