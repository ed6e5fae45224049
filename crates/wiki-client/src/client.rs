//! HTTP implementation of [`ArticleSource`] against a MediaWiki `api.php` endpoint.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::error::{Result, WikiError};
use crate::types::{ArticleReference, ArticleSource, ArticleSummary, MAIN_NAMESPACE};

/// English Wikipedia query endpoint.
pub const DEFAULT_API_URL: &str = "https://en.wikipedia.org/w/api.php";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`WikipediaClient`].
#[derive(Debug, Clone)]
pub struct WikiSettings {
    pub api_url: String,
    /// Wikimedia rejects requests without a descriptive User-Agent.
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for WikiSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: format!("randomwiki-bot/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// MediaWiki query API client.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: Client,
    api_url: String,
}

#[derive(Debug, Deserialize)]
struct QueryEnvelope<T> {
    query: T,
}

#[derive(Debug, Deserialize)]
struct RandomQuery {
    #[serde(default)]
    random: Vec<RandomEntry>,
}

#[derive(Debug, Deserialize)]
struct RandomEntry {
    title: String,
    #[serde(default)]
    ns: i64,
}

#[derive(Debug, Deserialize)]
struct ExtractQuery {
    #[serde(default)]
    pages: HashMap<String, PageEntry>,
}

#[derive(Debug, Deserialize)]
struct PageEntry {
    title: Option<String>,
    ns: Option<i64>,
    extract: Option<String>,
    /// `""` in format v1, `true` in format v2; absent for existing pages.
    missing: Option<serde_json::Value>,
}

impl PageEntry {
    fn is_missing(&self) -> bool {
        match &self.missing {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::Bool(b)) => *b,
            Some(_) => true,
        }
    }
}

impl WikipediaClient {
    /// Builds a client with its own connection pool, user agent and request timeout.
    pub fn new(settings: WikiSettings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(settings.user_agent)
            .timeout(settings.timeout)
            .build()?;
        Ok(Self {
            client,
            api_url: settings.api_url,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn query<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T> {
        let response = self.client.get(&self.api_url).query(params).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(WikiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: QueryEnvelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.query)
    }
}

#[async_trait]
impl ArticleSource for WikipediaClient {
    #[instrument(skip(self))]
    async fn fetch_random_article(&self) -> Result<ArticleReference> {
        let query: RandomQuery = self
            .query(&[("action", "query"), ("list", "random"), ("format", "json")])
            .await?;

        let entry = query
            .random
            .into_iter()
            .next()
            .ok_or_else(|| WikiError::Malformed("empty random list".to_string()))?;

        info!(title = %entry.title, ns = entry.ns, "step: random article picked");
        Ok(ArticleReference::new(entry.title, entry.ns))
    }

    #[instrument(skip(self))]
    async fn fetch_extract(&self, title: &str) -> Result<Option<ArticleSummary>> {
        let query: ExtractQuery = self
            .query(&[
                ("action", "query"),
                ("prop", "extracts"),
                ("exintro", "true"),
                ("titles", title),
                ("format", "json"),
            ])
            .await?;

        let page = query
            .pages
            .into_values()
            .next()
            .ok_or_else(|| WikiError::Malformed("no pages in extract response".to_string()))?;

        if page.is_missing() || page.ns != Some(MAIN_NAMESPACE) {
            debug!(
                title = %title,
                missing = page.is_missing(),
                ns = ?page.ns,
                "Page unavailable"
            );
            return Ok(None);
        }

        info!(
            title = %title,
            extract_len = page.extract.as_deref().map(str::len).unwrap_or(0),
            "step: extract loaded"
        );
        Ok(Some(ArticleSummary {
            title: page.title.unwrap_or_else(|| title.to_string()),
            raw_extract: page.extract,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = WikiSettings::default();
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert!(settings.user_agent.starts_with("randomwiki-bot/"));
        assert_eq!(settings.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_page_missing_flag_variants() {
        let page = |missing: Option<serde_json::Value>| PageEntry {
            title: None,
            ns: Some(0),
            extract: None,
            missing,
        };
        assert!(!page(None).is_missing());
        assert!(!page(Some(serde_json::Value::Bool(false))).is_missing());
        assert!(page(Some(serde_json::Value::Bool(true))).is_missing());
        assert!(page(Some(serde_json::Value::String(String::new()))).is_missing());
    }

    #[test]
    fn test_new_client_keeps_api_url() {
        let client = WikipediaClient::new(WikiSettings {
            api_url: "http://localhost:1234/w/api.php".to_string(),
            ..WikiSettings::default()
        })
        .unwrap();
        assert_eq!(client.api_url(), "http://localhost:1234/w/api.php");
    }
}
