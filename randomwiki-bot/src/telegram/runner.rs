//! REPL runner: converts teloxide messages to core::Message and passes them to the HandlerChain.

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use super::adapters::TelegramMessageWrapper;
use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;
use crate::handlers::BotUsername;

/// Starts long polling with the given teloxide Bot and HandlerChain.
///
/// Calls getMe first and stores the username in `bot_username` so group commands like
/// `/randomwiki@name` can be matched. Each text message is handled in its own task so a slow
/// article lookup does not hold up polling.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: BotUsername,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before repl");
            }
        }
        Err(e) => error!(error = %e, "getMe failed, accepting commands addressed to any bot"),
    }

    teloxide::repl(bot, move |msg: teloxide::types::Message| {
        let chain = handler_chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            if msg.text().is_none() {
                debug!(chat_id = core_msg.chat.id, "Skipping non-text message");
                return respond(());
            }

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, chat_id = core_msg.chat.id, "Handler chain failed");
                }
            });

            respond(())
        }
    })
    .await;

    Ok(())
}
