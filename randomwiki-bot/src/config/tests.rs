//! Config tests.

use crate::config::{BotConfig, DEFAULT_LOG_FILE};
use serial_test::serial;
use std::env;

const VARS: &[&str] = &[
    "TELEGRAM_BOT_TOKEN",
    "BOT_TOKEN",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "LOG_FILE",
    "WIKI_API_URL",
    "WIKI_USER_AGENT",
    "WIKI_TIMEOUT_SECS",
    "WIKI_MAX_ATTEMPTS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();
    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "test_token");
    assert!(config.telegram_api_url().is_none());
    assert_eq!(config.log_file(), DEFAULT_LOG_FILE);
    assert_eq!(config.wiki().api_url, "https://en.wikipedia.org/w/api.php");
    assert!(config.wiki().user_agent.starts_with("randomwiki-bot/"));
    assert_eq!(config.wiki().timeout_secs, 30);
    assert_eq!(config.max_attempts(), 10);
    assert!(config.validate().is_ok());

    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("TELEGRAM_BOT_TOKEN", "custom_token");
    env::set_var("TELEGRAM_API_URL", "http://127.0.0.1:8081");
    env::set_var("LOG_FILE", "/tmp/wiki.log");
    env::set_var("WIKI_API_URL", "https://de.wikipedia.org/w/api.php");
    env::set_var("WIKI_USER_AGENT", "my-bot/2.0 (ops@example.org)");
    env::set_var("WIKI_TIMEOUT_SECS", "5");
    env::set_var("WIKI_MAX_ATTEMPTS", "3");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "custom_token");
    assert_eq!(config.telegram_api_url(), Some("http://127.0.0.1:8081"));
    assert_eq!(config.log_file(), "/tmp/wiki.log");
    assert_eq!(config.wiki().api_url, "https://de.wikipedia.org/w/api.php");
    assert_eq!(config.wiki().user_agent, "my-bot/2.0 (ops@example.org)");
    assert_eq!(config.wiki().settings().timeout.as_secs(), 5);
    assert_eq!(config.max_attempts(), 3);
    assert!(config.validate().is_ok());

    clear_env();
}

#[test]
#[serial]
fn test_bot_token_fallback_and_override() {
    clear_env();
    env::set_var("BOT_TOKEN", "fallback_token");

    let config = BotConfig::load(None).unwrap();
    assert_eq!(config.bot_token(), "fallback_token");

    let config = BotConfig::load(Some("override_token".to_string())).unwrap();
    assert_eq!(config.bot_token(), "override_token");

    clear_env();
}

#[test]
#[serial]
fn test_missing_token_is_error() {
    clear_env();
    assert!(BotConfig::load(None).is_err());
}

#[test]
#[serial]
fn test_unparseable_numbers_fall_back_to_defaults() {
    clear_env();
    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("WIKI_TIMEOUT_SECS", "soon");
    env::set_var("WIKI_MAX_ATTEMPTS", "many");

    let config = BotConfig::load(None).unwrap();
    assert_eq!(config.wiki().timeout_secs, 30);
    assert_eq!(config.max_attempts(), 10);

    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_bad_values() {
    clear_env();
    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");

    env::set_var("TELEGRAM_API_URL", "not-a-valid-url");
    assert!(BotConfig::load(None).unwrap().validate().is_err());
    env::remove_var("TELEGRAM_API_URL");

    env::set_var("WIKI_API_URL", "wikipedia");
    assert!(BotConfig::load(None).unwrap().validate().is_err());
    env::remove_var("WIKI_API_URL");

    env::set_var("WIKI_MAX_ATTEMPTS", "0");
    assert!(BotConfig::load(None).unwrap().validate().is_err());

    clear_env();
}
