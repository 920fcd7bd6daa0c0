use serde::Serialize;

/// Download count used when the feed's `DownloadCount` is not an integer
pub const DOWNLOADS_SENTINEL: i64 = -1;

/// DependencyEdge value object: the `package:version` declaration that
/// qualified a dependant
///
/// Package and version always come from the same dependency token, so they
/// are kept together in one value rather than as two independent fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyEdge {
    package: String,
    version: String,
}

impl DependencyEdge {
    pub fn new(package: String, version: String) -> Self {
        Self { package, version }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

/// DependantRecord represents one package that depends on the target
///
/// Records are created once per feed entry and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependantRecord {
    id: String,
    their_version: String,
    downloads: i64,
    edge: DependencyEdge,
}

impl DependantRecord {
    pub fn new(id: String, their_version: String, downloads: i64, edge: DependencyEdge) -> Self {
        Self {
            id,
            their_version,
            downloads,
            edge,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn their_version(&self) -> &str {
        &self.their_version
    }

    /// Download count, or [`DOWNLOADS_SENTINEL`] when the feed value was unparsable
    pub fn downloads(&self) -> i64 {
        self.downloads
    }

    pub fn edge(&self) -> &DependencyEdge {
        &self.edge
    }

    pub fn our_package(&self) -> &str {
        self.edge.package()
    }

    pub fn our_version(&self) -> &str {
        self.edge.version()
    }

    pub fn has_known_downloads(&self) -> bool {
        self.downloads != DOWNLOADS_SENTINEL
    }
}
