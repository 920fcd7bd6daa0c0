use crate::dependants::domain::FeedPage;
use crate::shared::Result;
use async_trait::async_trait;

/// FeedClient port for reading a paginated package feed
///
/// This port abstracts the HTTP transport and document parsing used to
/// talk to the registry. URIs are opaque to implementations: they are either
/// built by `FeedQuery` or taken verbatim from a page's next link.
///
/// # Async Support
/// Methods are async; the use case awaits each call before issuing the next.
#[async_trait]
pub trait FeedClient: Send + Sync {
    /// Fetches and parses one Atom feed page
    ///
    /// # Arguments
    /// * `uri` - Absolute URI of the page
    ///
    /// # Returns
    /// The page's entries and its unescaped next link, if any
    ///
    /// # Errors
    /// Returns an error if:
    /// - The request fails at the transport level
    /// - The server answers with a non-success status
    /// - The response body is not a well-formed feed document
    async fn fetch_feed(&self, uri: &str) -> Result<FeedPage>;

    /// Fetches a response body as plain text
    ///
    /// Used for the `$count` endpoint, which answers with a bare integer.
    ///
    /// # Errors
    /// Returns an error if the request fails or the status is not a success
    async fn fetch_text(&self, uri: &str) -> Result<String>;
}
