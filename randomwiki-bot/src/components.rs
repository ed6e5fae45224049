//! Component factory: builds BotComponents from config and wires the handler chain.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};
use wiki_client::{ArticleSource, WikipediaClient};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::Bot as CoreBot;
use crate::handlers::{BotUsername, LoggingHandler, RandomWikiHandler, StartHandler};
use crate::publisher::ArticlePublisher;
use crate::telegram::TelegramBotAdapter;

/// Dependencies shared by the runner and the handlers.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: Bot,
    pub bot_username: BotUsername,
    /// Outbound messages; the Telegram adapter in production, a double in tests.
    pub bot: Arc<dyn CoreBot>,
    pub publisher: Arc<ArticlePublisher>,
}

impl BotComponents {
    /// Assembles components from already-built parts.
    pub fn new(
        teloxide_bot: Bot,
        bot: Arc<dyn CoreBot>,
        article_source: Arc<dyn ArticleSource>,
        max_attempts: u32,
    ) -> Self {
        let publisher = Arc::new(ArticlePublisher::new(
            article_source,
            bot.clone(),
            max_attempts,
        ));
        Self {
            teloxide_bot,
            bot_username: Arc::new(RwLock::new(None)),
            bot,
            publisher,
        }
    }
}

/// Builds the teloxide bot (with optional API URL override), the Telegram adapter and the
/// Wikipedia client from config.
#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = {
        let bot = Bot::new(config.bot_token());
        match config.telegram_api_url() {
            Some(url_str) => match reqwest::Url::parse(url_str) {
                Ok(url) => bot.set_api_url(url),
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            },
            None => bot,
        }
    };

    let bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    let wiki = WikipediaClient::new(config.wiki().settings())
        .map_err(|e| anyhow::anyhow!("Failed to build Wikipedia client: {}", e))?;
    info!(
        api_url = %wiki.api_url(),
        max_attempts = config.max_attempts(),
        "Using Wikipedia API"
    );

    Ok(BotComponents::new(
        teloxide_bot,
        bot,
        Arc::new(wiki),
        config.max_attempts(),
    ))
}

/// Builds the handler chain: logging → /start → /randomwiki.
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(StartHandler::new(
            components.bot.clone(),
            components.bot_username.clone(),
        )))
        .add_handler(Arc::new(RandomWikiHandler::new(
            components.publisher.clone(),
            components.bot_username.clone(),
        )))
}
