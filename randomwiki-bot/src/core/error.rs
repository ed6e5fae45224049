//! Error types for the bot core.
//!
//! [`BotError`] covers the two ways a command can fail: the article lookup or the outbound send.

use thiserror::Error;
use wiki_client::WikiError;

/// Top-level error for command handling.
#[derive(Error, Debug)]
pub enum BotError {
    /// Sending to the chat transport failed.
    #[error("Bot error: {0}")]
    Bot(String),

    /// Reaching or decoding the encyclopedia API failed.
    #[error("Wiki error: {0}")]
    Wiki(#[from] WikiError),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
