use crate::dependants::domain::{DependantRecord, PackageId};

/// DependantsResponse - Internal response DTO from the find-dependants use case
///
/// Only produced when every request of the run succeeded; a failed run
/// yields an error instead, so no partial record list ever escapes.
#[derive(Debug, Clone)]
pub struct DependantsResponse {
    /// Package whose dependants were searched
    pub target: PackageId,
    /// Published versions of the target (informational)
    pub versions: Vec<String>,
    /// Dependant count announced by the feed's count endpoint (advisory)
    pub expected_count: u64,
    /// Number of pages actually fetched
    pub pages_fetched: usize,
    /// Dependants in feed order
    pub records: Vec<DependantRecord>,
}

impl DependantsResponse {
    pub fn new(
        target: PackageId,
        versions: Vec<String>,
        expected_count: u64,
        pages_fetched: usize,
        records: Vec<DependantRecord>,
    ) -> Self {
        Self {
            target,
            versions,
            expected_count,
            pages_fetched,
            records,
        }
    }
}
