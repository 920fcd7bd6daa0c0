mod edge_parser;
mod feed_query;
mod report_metadata_generator;

pub use edge_parser::{parse_downloads, DependencyEdgeParser};
pub use feed_query::{FeedQuery, DEFAULT_FEED_URL, FEED_PAGE_SIZE};
pub use report_metadata_generator::ReportMetadataGenerator;
