//! Picks a random article, loads its summary and posts it to a chat.
//!
//! Pages that are missing, outside the main namespace or with an empty extract are skipped
//! by drawing another random article. The number of lookups per invocation is capped at
//! `max_attempts`; when the cap is hit the chat gets [`GIVE_UP_MESSAGE`] instead of an article.
//! Lookup failures abort the invocation without a reply; send failures are returned as-is.

use std::sync::Arc;

use tracing::{info, instrument, warn};
use wiki_client::{ArticleReference, ArticleSource, ArticleSummary};

use crate::core::{Bot, Chat, Result};

/// Lookups per invocation when not configured.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Sent when every attempt hit an unusable article.
pub const GIVE_UP_MESSAGE: &str =
    "Sorry, I couldn't find a readable Wikipedia article this time. Please try /randomwiki again.";

/// Fixed layout of a published article.
pub fn format_article_message(title: &str, summary: &str) -> String {
    format!("Random Wikipedia Article:\n\nTitle: {title}\n\nSummary: {summary}")
}

/// How one `/randomwiki` invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// One article message was sent after `attempts` lookups.
    Published { title: String, attempts: u32 },
    /// Every lookup was unusable; the give-up message was sent.
    GaveUp { attempts: u32 },
}

/// Fetches and posts random articles through injected source and bot.
pub struct ArticlePublisher {
    source: Arc<dyn ArticleSource>,
    bot: Arc<dyn Bot>,
    max_attempts: u32,
}

impl ArticlePublisher {
    /// `max_attempts` below 1 is raised to 1.
    pub fn new(source: Arc<dyn ArticleSource>, bot: Arc<dyn Bot>, max_attempts: u32) -> Self {
        Self {
            source,
            bot,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Draws a random article and publishes it (see [`Self::publish`]).
    #[instrument(skip(self, chat), fields(chat_id = chat.id))]
    pub async fn publish_random(&self, chat: &Chat) -> Result<PublishOutcome> {
        let reference = self.source.fetch_random_article().await?;
        self.publish(chat, reference).await
    }

    /// Publishes `reference`, drawing replacements while the current article is unusable.
    #[instrument(skip(self, chat, reference), fields(chat_id = chat.id))]
    pub async fn publish(&self, chat: &Chat, reference: ArticleReference) -> Result<PublishOutcome> {
        let mut reference = reference;
        let mut attempt = 1;

        loop {
            let summary = self.source.fetch_extract(&reference.title).await?;

            if let Some(text) = summary.as_ref().and_then(ArticleSummary::plain_summary) {
                let message = format_article_message(&reference.title, &text);
                self.bot.send_message(chat, &message).await?;
                info!(
                    title = %reference.title,
                    attempt = attempt,
                    "step: article published"
                );
                return Ok(PublishOutcome::Published {
                    title: reference.title,
                    attempts: attempt,
                });
            }

            info!(
                title = %reference.title,
                namespace = reference.namespace,
                attempt = attempt,
                "Article not found, trying again"
            );

            if attempt >= self.max_attempts {
                warn!(attempts = attempt, "No usable article found, giving up");
                self.bot.send_message(chat, GIVE_UP_MESSAGE).await?;
                return Ok(PublishOutcome::GaveUp { attempts: attempt });
            }

            attempt += 1;
            reference = self.source.fetch_random_article().await?;
        }
    }
}
