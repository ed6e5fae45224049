//! Scripted [`ArticleSource`] that replays queued lookups and counts calls.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use wiki_client::{ArticleReference, ArticleSource, ArticleSummary, Result, WikiError};

/// Random lookups pop from a queue; once it is empty every lookup returns a talk page, so a
/// source without usable articles never runs dry. Extract lookups answer from a per-title
/// table and return `Ok(None)` for unknown titles.
#[derive(Default)]
pub struct ScriptedSource {
    randoms: Mutex<VecDeque<Result<ArticleReference>>>,
    extracts: Mutex<HashMap<String, Option<ArticleSummary>>>,
    random_calls: AtomicUsize,
    extract_calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_random(self, title: &str, namespace: i64) -> Self {
        self.randoms
            .lock()
            .unwrap()
            .push_back(Ok(ArticleReference::new(title, namespace)));
        self
    }

    pub fn with_random_error(self) -> Self {
        self.randoms
            .lock()
            .unwrap()
            .push_back(Err(WikiError::Malformed("scripted failure".to_string())));
        self
    }

    /// Existing main-namespace page with the given HTML extract.
    pub fn with_extract(self, title: &str, extract: &str) -> Self {
        self.extracts.lock().unwrap().insert(
            title.to_string(),
            Some(ArticleSummary {
                title: title.to_string(),
                raw_extract: Some(extract.to_string()),
            }),
        );
        self
    }

    /// Missing page or page outside the main namespace.
    pub fn with_unavailable(self, title: &str) -> Self {
        self.extracts.lock().unwrap().insert(title.to_string(), None);
        self
    }

    pub fn build(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn random_calls(&self) -> usize {
        self.random_calls.load(Ordering::SeqCst)
    }

    pub fn extract_calls(&self) -> Vec<String> {
        self.extract_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleSource for ScriptedSource {
    async fn fetch_random_article(&self) -> Result<ArticleReference> {
        self.random_calls.fetch_add(1, Ordering::SeqCst);
        self.randoms
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ArticleReference::new("Talk:Endless", 1)))
    }

    async fn fetch_extract(&self, title: &str) -> Result<Option<ArticleSummary>> {
        self.extract_calls.lock().unwrap().push(title.to_string());
        Ok(self.extracts.lock().unwrap().get(title).cloned().flatten())
    }
}
