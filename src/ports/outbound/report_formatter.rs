use crate::dependants::domain::{DependantRecord, PackageId, ReportMetadata};
use crate::shared::Result;

/// ReportFormatter port for rendering the dependants report
///
/// This port abstracts the formatting logic for different report formats
/// (Markdown, JSON).
pub trait ReportFormatter {
    /// Formats the dependants of `target`
    ///
    /// # Arguments
    /// * `target` - The package whose dependants were collected
    /// * `records` - Dependant records in feed order
    /// * `metadata` - Generation metadata (tool, version, timestamp)
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(
        &self,
        target: &PackageId,
        records: &[DependantRecord],
        metadata: &ReportMetadata,
    ) -> Result<String>;
}
