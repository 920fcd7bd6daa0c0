/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod dependants_request;
mod dependants_response;
mod output_format;

pub use dependants_request::{DependantsRequest, DEFAULT_MAX_PAGES};
pub use dependants_response::DependantsResponse;
pub use output_format::OutputFormat;
