//! Incoming message type for the core model.

use super::{chat::Chat, user::User};

/// A single incoming message.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Message text; empty for non-text messages.
    pub content: String,
}
