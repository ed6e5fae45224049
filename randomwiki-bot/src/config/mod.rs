//! Bot configuration: BaseConfig (Telegram + log) + WikiConfig (encyclopedia API + retry cap).

mod base;
mod bot_config;
mod wiki;

#[cfg(test)]
mod tests;

pub use base::{BaseConfig, DEFAULT_LOG_FILE};
pub use bot_config::BotConfig;
pub use wiki::WikiConfig;
