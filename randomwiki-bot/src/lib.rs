//! # Random Wikipedia bot
//!
//! Telegram bot answering `/randomwiki` with a random Wikipedia article's title and intro.
//! Core (Handler, Bot, Message), chain (HandlerChain), command handlers, the article publisher,
//! and the Telegram layer (adapters, run_repl) live here; the encyclopedia client is the
//! `wiki-client` crate.

pub mod chain;
pub mod cli;
pub mod command;
pub mod components;
pub mod config;
pub mod core;
pub mod handlers;
pub mod publisher;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use crate::core::{
    init_tracing, Bot, BotError, Chat, Handler, HandlerResponse, Message, Result, ToCoreMessage,
    ToCoreUser, User,
};

pub use chain::HandlerChain;
pub use command::{is_command, parse_command, RANDOM_WIKI_COMMAND, START_COMMAND};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::{BaseConfig, BotConfig, WikiConfig};
pub use handlers::{BotUsername, LoggingHandler, RandomWikiHandler, StartHandler, START_MESSAGE};
pub use publisher::{
    format_article_message, ArticlePublisher, PublishOutcome, DEFAULT_MAX_ATTEMPTS,
    GIVE_UP_MESSAGE,
};
pub use runner::run_bot;
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
