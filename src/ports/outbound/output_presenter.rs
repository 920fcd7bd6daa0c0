use crate::shared::Result;

/// OutputPresenter port for delivering the rendered report
///
/// Implementations write the whole report in one call, so a report is
/// either delivered completely or the call fails.
pub trait OutputPresenter {
    /// Delivers `content` to stdout, a file, or another destination
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn present(&self, content: &str) -> Result<()>;
}
