use crate::dependants::domain::{DependantRecord, DependencyEdge, PackageId, ReportMetadata};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    metadata: JsonMetadata<'a>,
    target: &'a str,
    count: usize,
    dependants: Vec<JsonDependant<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonMetadata<'a> {
    timestamp: &'a str,
    tool: JsonTool<'a>,
}

#[derive(Debug, Serialize)]
struct JsonTool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct JsonDependant<'a> {
    id: &'a str,
    version: &'a str,
    /// `null` when the feed's download count was not an integer
    downloads: Option<i64>,
    dependency: &'a DependencyEdge,
}

/// JsonFormatter adapter for a machine-readable dependants report
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(
        &self,
        target: &PackageId,
        records: &[DependantRecord],
        metadata: &ReportMetadata,
    ) -> Result<String> {
        let report = JsonReport {
            metadata: JsonMetadata {
                timestamp: metadata.timestamp(),
                tool: JsonTool {
                    name: metadata.tool_name(),
                    version: metadata.tool_version(),
                },
            },
            target: target.as_str(),
            count: records.len(),
            dependants: records
                .iter()
                .map(|record| JsonDependant {
                    id: record.id(),
                    version: record.their_version(),
                    downloads: record
                        .has_known_downloads()
                        .then(|| record.downloads()),
                    dependency: record.edge(),
                })
                .collect(),
        };

        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }
}
