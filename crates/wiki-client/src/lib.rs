//! # Wiki client
//!
//! Client for the MediaWiki query API (`api.php`) used by the random-article bot.
//!
//! ## ArticleSource
//!
//! [`ArticleSource`] is the seam between the bot and the encyclopedia: it picks one random
//! page ([`ArticleSource::fetch_random_article`]) and loads that page's introductory extract
//! ([`ArticleSource::fetch_extract`]). [`WikipediaClient`] implements it over HTTP; tests
//! substitute a scripted source.
//!
//! ## Example
//!
//! ```rust,no_run
//! use wiki_client::{ArticleSource, WikipediaClient, WikiSettings};
//!
//! async fn example() -> Result<(), wiki_client::WikiError> {
//!     let client = WikipediaClient::new(WikiSettings::default())?;
//!     let article = client.fetch_random_article().await?;
//!     if let Some(summary) = client.fetch_extract(&article.title).await? {
//!         println!("{}: {:?}", summary.title, summary.plain_summary());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Availability
//!
//! `fetch_extract` returns `Ok(None)` when the page is missing or lives outside the main
//! namespace (`ns != 0`). That is a signal to pick another article, not an error.
//! Transport failures, non-2xx statuses and undecodable bodies are [`WikiError`]s.

mod client;
mod error;
mod sanitize;
mod types;

pub use client::{WikiSettings, WikipediaClient, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{Result, WikiError};
pub use sanitize::strip_markup;
pub use types::{ArticleReference, ArticleSource, ArticleSummary, MAIN_NAMESPACE};
