//! Article types and the [`ArticleSource`] trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::sanitize::strip_markup;

/// Namespace id of regular content pages.
pub const MAIN_NAMESPACE: i64 = 0;

/// One page picked by the random lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleReference {
    pub title: String,
    pub namespace: i64,
    /// Entries of the random list always exist; kept so callers can build references by hand.
    pub exists: bool,
}

impl ArticleReference {
    /// Reference to an existing page in the given namespace.
    pub fn new(title: impl Into<String>, namespace: i64) -> Self {
        Self {
            title: title.into(),
            namespace,
            exists: true,
        }
    }

    pub fn is_main_namespace(&self) -> bool {
        self.namespace == MAIN_NAMESPACE
    }
}

/// Intro extract of an existing main-namespace page. `raw_extract` is HTML and may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary {
    pub title: String,
    pub raw_extract: Option<String>,
}

impl ArticleSummary {
    /// Extract with markup removed; whitespace is left as the API sent it.
    /// `None` when the extract is absent or the empty string.
    pub fn plain_summary(&self) -> Option<String> {
        match self.raw_extract.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(strip_markup(raw)),
        }
    }
}

/// Source of random articles and their extracts.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Picks one random page.
    async fn fetch_random_article(&self) -> Result<ArticleReference>;

    /// Loads the intro extract for `title`. `Ok(None)` when the page is missing or not in the
    /// main namespace.
    async fn fetch_extract(&self, title: &str) -> Result<Option<ArticleSummary>>;
}
