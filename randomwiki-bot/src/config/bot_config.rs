//! BotConfig: BaseConfig + WikiConfig. Use load() for env-based loading.

use anyhow::Result;

use super::{BaseConfig, WikiConfig};

pub struct BotConfig {
    pub base: BaseConfig,
    pub wiki: WikiConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides the
    /// token variables. Call validate() after load to fail fast before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let wiki = WikiConfig::from_env()?;
        Ok(Self { base, wiki })
    }

    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.wiki.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn wiki(&self) -> &WikiConfig {
        &self.wiki
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn max_attempts(&self) -> u32 {
        self.wiki.max_attempts
    }
}
