use super::atom_parser::AtomFeedParser;
use crate::dependants::domain::FeedPage;
use crate::ports::outbound::FeedClient;
use crate::shared::error::DependantsError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// NuGetFeedClient adapter for reading the NuGet OData feed over HTTP
///
/// This adapter implements the FeedClient port. Each call issues exactly one
/// GET request; there is no retry, so any failure surfaces immediately.
pub struct NuGetFeedClient {
    client: reqwest::Client,
}

impl NuGetFeedClient {
    /// Creates a new feed client with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new feed client with a custom per-request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("nuget-dependants/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Wraps an already configured reqwest client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Sends a GET request and rejects non-success statuses
    async fn get(&self, uri: &str, accept: &str) -> Result<reqwest::Response> {
        let response = self
            .client
            .get(uri)
            .header(reqwest::header::ACCEPT, accept)
            .send()
            .await
            .map_err(|e| DependantsError::Transport {
                uri: uri.to_string(),
                details: e.to_string(),
            })?;

        // Reason is the canonical phrase for the code, not the server's text
        let status = response.status();
        if !status.is_success() {
            return Err(DependantsError::HttpStatus {
                uri: uri.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            }
            .into());
        }

        Ok(response)
    }

    async fn read_body(uri: &str, response: reqwest::Response) -> Result<String> {
        response
            .text()
            .await
            .map_err(|e| {
                DependantsError::Transport {
                    uri: uri.to_string(),
                    details: format!("Failed to read response body: {}", e),
                }
                .into()
            })
    }
}

#[async_trait]
impl FeedClient for NuGetFeedClient {
    async fn fetch_feed(&self, uri: &str) -> Result<FeedPage> {
        let response = self
            .get(uri, "application/atom+xml, application/xml")
            .await?;
        let body = Self::read_body(uri, response).await?;

        AtomFeedParser::parse(&body).map_err(|e| {
            DependantsError::MalformedFeed {
                uri: uri.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    async fn fetch_text(&self, uri: &str) -> Result<String> {
        let response = self.get(uri, "text/plain").await?;
        Self::read_body(uri, response).await
    }
}
