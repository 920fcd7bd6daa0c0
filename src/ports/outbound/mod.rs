/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, file system, console).
pub mod feed_client;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use feed_client::FeedClient;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
