use nuget_dependants::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock FeedClient serving canned pages and plain-text bodies by URI
///
/// Every request is recorded so tests can assert on ordering.
#[derive(Default, Clone)]
pub struct MockFeedClient {
    pages: HashMap<String, FeedPage>,
    texts: HashMap<String, String>,
    statuses: HashMap<String, u16>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockFeedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, uri: &str, page: FeedPage) -> Self {
        self.pages.insert(uri.to_string(), page);
        self
    }

    pub fn with_text(mut self, uri: &str, text: &str) -> Self {
        self.texts.insert(uri.to_string(), text.to_string());
        self
    }

    /// Makes `uri` answer with an HTTP error status
    pub fn with_status(mut self, uri: &str, status: u16) -> Self {
        self.statuses.insert(uri.to_string(), status);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, uri: &str) -> Result<()> {
        self.requests.lock().unwrap().push(uri.to_string());
        match self.statuses.get(uri) {
            Some(&status) => Err(DependantsError::HttpStatus {
                uri: uri.to_string(),
                status,
                reason: "Service Unavailable".to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl FeedClient for MockFeedClient {
    async fn fetch_feed(&self, uri: &str) -> Result<FeedPage> {
        self.record(uri)?;
        self.pages
            .get(uri)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no page registered for {}", uri))
    }

    async fn fetch_text(&self, uri: &str) -> Result<String> {
        self.record(uri)?;
        self.texts
            .get(uri)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no text registered for {}", uri))
    }
}
