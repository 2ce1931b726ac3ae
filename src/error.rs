//! Error types for the health portal

use thiserror::Error;

/// Main error type for portal operations
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Category '{0}' not found in catalog")]
    CategoryNotFound(String),

    #[error("Element '{0}' not found on page")]
    ElementNotFound(String),

    #[error("Duplicate category key '{0}' already exists")]
    DuplicateCategory(String),

    #[error("Invalid page configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Page effect failed: {0}")]
    Effects(String),
}

/// Result type for portal operations
pub type PortalResult<T> = Result<T, PortalError>;
