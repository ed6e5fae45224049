//! Error types for the wiki client.

use thiserror::Error;

/// Failure reaching the query API or understanding its response.
#[derive(Error, Debug)]
pub enum WikiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Wikipedia API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode Wikipedia response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Malformed Wikipedia response: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, WikiError>;
