//! Encyclopedia API settings and the per-command lookup cap.

use anyhow::Result;
use std::env;
use std::time::Duration;

use wiki_client::{WikiSettings, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

use crate::publisher::DEFAULT_MAX_ATTEMPTS;

#[derive(Debug, Clone)]
pub struct WikiConfig {
    /// WIKI_API_URL
    pub api_url: String,
    /// WIKI_USER_AGENT
    pub user_agent: String,
    /// WIKI_TIMEOUT_SECS
    pub timeout_secs: u64,
    /// WIKI_MAX_ATTEMPTS: lookups per /randomwiki before giving up
    pub max_attempts: u32,
}

impl WikiConfig {
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("WIKI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let user_agent = env::var("WIKI_USER_AGENT")
            .unwrap_or_else(|_| format!("randomwiki-bot/{}", env!("CARGO_PKG_VERSION")));
        let timeout_secs = env::var("WIKI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let max_attempts = env::var("WIKI_MAX_ATTEMPTS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_ATTEMPTS);

        Ok(Self {
            api_url,
            user_agent,
            timeout_secs,
            max_attempts,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.api_url).is_err() {
            anyhow::bail!("WIKI_API_URL is not a valid URL: {}", self.api_url);
        }
        if self.max_attempts == 0 {
            anyhow::bail!("WIKI_MAX_ATTEMPTS must be at least 1");
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("WIKI_TIMEOUT_SECS must be at least 1");
        }
        Ok(())
    }

    /// Client settings for [`wiki_client::WikipediaClient`].
    pub fn settings(&self) -> WikiSettings {
        WikiSettings {
            api_url: self.api_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}
