/// Network adapters for the package feed
mod atom_parser;
mod nuget_feed_client;

pub use atom_parser::AtomFeedParser;
pub use nuget_feed_client::{NuGetFeedClient, DEFAULT_TIMEOUT_SECS};
