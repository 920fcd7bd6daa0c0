pub mod dependant;
pub mod feed_page;
pub mod package_id;
pub mod report_metadata;

pub use dependant::{DependantRecord, DependencyEdge, DOWNLOADS_SENTINEL};
pub use feed_page::{FeedEntry, FeedPage};
pub use package_id::PackageId;
pub use report_metadata::ReportMetadata;
