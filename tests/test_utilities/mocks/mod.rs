/// Mock implementations for testing
mod mock_feed_client;
mod mock_progress_reporter;

#[allow(unused_imports)]
pub use mock_feed_client::MockFeedClient;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
