use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// The tool reports a single success/failure signal: every failure,
/// including invalid arguments, maps to the same non-zero code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report written successfully
    Success = 0,
    /// Invalid arguments, network failure, malformed feed, or output error
    Failure = 1,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Failure => write!(f, "Failure (1)"),
        }
    }
}

/// Application-specific errors for dependant discovery.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum DependantsError {
    #[error("Invalid package id: '{id}'\nReason: {reason}\n\n💡 Hint: NuGet package ids contain only letters, digits, '.', '-' and '_'")]
    InvalidPackageId { id: String, reason: String },

    #[error("Got error {status}: {reason}\nRequest: {uri}")]
    HttpStatus {
        uri: String,
        status: u16,
        reason: String,
    },

    #[error("Request failed: {uri}\nDetails: {details}\n\n💡 Hint: Please check your internet connection and the feed URL")]
    Transport { uri: String, details: String },

    #[error("Failed to parse feed document: {uri}\nDetails: {details}")]
    MalformedFeed { uri: String, details: String },

    #[error("Feed entry is missing the '{field}' property\nRequest: {uri}")]
    MissingField { field: String, uri: String },

    #[error("Count endpoint did not return an integer: {uri}\nBody: '{body}'")]
    InvalidCount { uri: String, body: String },

    #[error("Dependant '{dependant}' has no dependency matching '{target}'\nDependencies: '{dependencies}'\n\n💡 Hint: The feed's filter and its data disagree; the report would be wrong, so the run was aborted")]
    DependencyEdgeNotFound {
        dependant: String,
        target: String,
        dependencies: String,
    },

    #[error("Pagination did not finish within {limit} page(s)\n\n💡 Hint: Raise the limit with --max-pages if the feed is genuinely this large")]
    PageLimitExceeded { limit: usize },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
