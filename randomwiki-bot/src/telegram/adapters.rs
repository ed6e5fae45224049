//! Conversions from teloxide updates into the core model.

use crate::core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Borrowed teloxide user, convertible to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
        }
    }
}

/// Borrowed teloxide message, convertible to core [`Message`]. Non-text messages get empty
/// content, which no command matches.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.0.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(User::unknown),
            chat: Chat::new(self.0.chat.id.0),
            content: self.0.text().unwrap_or("").to_string(),
        }
    }
}
