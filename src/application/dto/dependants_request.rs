use crate::dependants::domain::PackageId;

/// Default upper bound on the number of pages walked in one run
pub const DEFAULT_MAX_PAGES: usize = 10_000;

/// DependantsRequest - Internal request DTO for the find-dependants use case
#[derive(Debug, Clone)]
pub struct DependantsRequest {
    /// Package whose dependants are searched
    pub target: PackageId,
    /// Maximum number of feed pages to fetch before giving up
    pub max_pages: usize,
}

impl DependantsRequest {
    pub fn new(target: PackageId, max_pages: usize) -> Self {
        Self { target, max_pages }
    }
}
