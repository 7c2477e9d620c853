//! Client error types

use thiserror::Error;

use crate::form::FormError;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (transport-level)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Create attempted with no categories available and none selected
    #[error("No categories available to assign the product to")]
    EmptyCategoryList,

    /// Image upload rejected or transport failed
    #[error("Upload failed: {0}")]
    Upload(String),

    /// A capture/upload sub-flow is already in progress for this session
    #[error("An image upload is already in progress")]
    UploadInFlight,

    /// Operation not available in the session's current state
    #[error("Invalid session state: {0}")]
    InvalidState(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Form field error
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    /// Local file I/O failed (reading picked image bytes)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
