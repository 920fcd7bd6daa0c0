use crate::dependants::domain::ReportMetadata;
use chrono::Utc;

/// ReportMetadataGenerator service for generating report metadata
pub struct ReportMetadataGenerator;

impl ReportMetadataGenerator {
    /// Generates report metadata stamped with the current time
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool generating the report
    /// * `tool_version` - Version of the tool
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();

        ReportMetadata::new(timestamp, tool_name.to_string(), tool_version.to_string())
    }

    /// Generates report metadata with default tool information
    ///
    /// This uses the compile-time version from Cargo.toml
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata("nuget-dependants", env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = ReportMetadataGenerator::generate_metadata("test-tool", "1.0.0");

        assert_eq!(metadata.tool_name(), "test-tool");
        assert_eq!(metadata.tool_version(), "1.0.0");
        assert!(!metadata.timestamp().is_empty());
    }

    #[test]
    fn test_generate_default_metadata() {
        let metadata = ReportMetadataGenerator::generate_default_metadata();

        assert_eq!(metadata.tool_name(), "nuget-dependants");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let metadata = ReportMetadataGenerator::generate_default_metadata();
        assert!(chrono::DateTime::parse_from_rfc3339(metadata.timestamp()).is_ok());
    }
}
