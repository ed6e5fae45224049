//! `/start`: tells the user how to ask for an article.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument};

use super::BotUsername;
use crate::command::{is_command, START_COMMAND};
use crate::core::{Bot, Handler, HandlerResponse, Message, Result};

/// Fixed reply to `/start`.
pub const START_MESSAGE: &str =
    "To get a random Wikipedia article, type /randomwiki and wait for a second.";

/// Replies to `/start` with [`START_MESSAGE`]; ignores everything else.
pub struct StartHandler {
    bot: Arc<dyn Bot>,
    bot_username: BotUsername,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>, bot_username: BotUsername) -> Self {
        Self { bot, bot_username }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let username = self.bot_username.read().await.clone();
        if !is_command(&message.content, START_COMMAND, username.as_deref()) {
            return Ok(HandlerResponse::Ignore);
        }

        match self.bot.reply_to(message, START_MESSAGE).await {
            Ok(()) => info!(chat_id = message.chat.id, "Sent start instructions"),
            Err(e) => error!(chat_id = message.chat.id, error = %e, "Failed to send start instructions"),
        }
        Ok(HandlerResponse::Stop)
    }
}
