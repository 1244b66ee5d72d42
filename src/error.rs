//! Transport Errors

use thiserror::Error;

/// Everything that can go wrong talking to the persistence API or the catalog
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("{url} answered with status {status}")]
    Status { status: u16, url: String },

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("could not encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;
