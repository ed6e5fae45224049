//! `/randomwiki`: posts a random article to the chat.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument, warn};

use super::BotUsername;
use crate::command::{is_command, RANDOM_WIKI_COMMAND};
use crate::core::{Handler, HandlerResponse, Message, Result};
use crate::publisher::{ArticlePublisher, PublishOutcome};

/// Runs [`ArticlePublisher::publish_random`] for `/randomwiki`.
///
/// Failures are logged here and never reach the user: a failed lookup or send ends with no reply.
pub struct RandomWikiHandler {
    publisher: Arc<ArticlePublisher>,
    bot_username: BotUsername,
}

impl RandomWikiHandler {
    pub fn new(publisher: Arc<ArticlePublisher>, bot_username: BotUsername) -> Self {
        Self {
            publisher,
            bot_username,
        }
    }
}

#[async_trait]
impl Handler for RandomWikiHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let username = self.bot_username.read().await.clone();
        if !is_command(&message.content, RANDOM_WIKI_COMMAND, username.as_deref()) {
            return Ok(HandlerResponse::Ignore);
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            "step: /randomwiki started"
        );

        match self.publisher.publish_random(&message.chat).await {
            Ok(PublishOutcome::Published { title, attempts }) => {
                info!(chat_id = message.chat.id, title = %title, attempts, "Posted article to chat");
            }
            Ok(PublishOutcome::GaveUp { attempts }) => {
                warn!(chat_id = message.chat.id, attempts, "Gave up finding an article");
            }
            Err(e) => {
                error!(chat_id = message.chat.id, error = %e, "Error handling /randomwiki command");
            }
        }

        Ok(HandlerResponse::Stop)
    }
}
