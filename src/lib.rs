//! nuget-dependants - find every NuGet package that depends on a given package
//!
//! This library walks the NuGet OData feed, collects each package whose
//! latest version declares a dependency on the target, and renders the
//! result as a Markdown (or JSON) report.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependants`): Value objects and pure parsing services
//! - **Application Layer** (`application`): The pagination use case, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use nuget_dependants::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let use_case = FindDependantsUseCase::new(
//!     NuGetFeedClient::new()?,
//!     StderrProgressReporter::new(),
//!     FeedQuery::default(),
//! );
//!
//! let target = PackageId::new("Newtonsoft.Json".to_string())?;
//! let response = use_case
//!     .execute(DependantsRequest::new(target, DEFAULT_MAX_PAGES))
//!     .await?;
//!
//! let metadata = ReportMetadataGenerator::generate_default_metadata();
//! let report = MarkdownFormatter::new().format(&response.target, &response.records, &metadata)?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependants;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{AtomFeedParser, NuGetFeedClient};
    pub use crate::application::dto::{
        DependantsRequest, DependantsResponse, OutputFormat, DEFAULT_MAX_PAGES,
    };
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::FindDependantsUseCase;
    pub use crate::dependants::domain::{
        DependantRecord, DependencyEdge, FeedEntry, FeedPage, PackageId, ReportMetadata,
        DOWNLOADS_SENTINEL,
    };
    pub use crate::dependants::services::{
        parse_downloads, DependencyEdgeParser, FeedQuery, ReportMetadataGenerator,
    };
    pub use crate::ports::outbound::{
        FeedClient, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::DependantsError;
    pub use crate::shared::Result;
}
