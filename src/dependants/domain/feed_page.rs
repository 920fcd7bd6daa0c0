/// FeedEntry holds the raw properties of one Atom entry
///
/// Every property is optional at the document level; interpretation
/// (sentinel downloads, edge extraction) happens in the use case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    pub id: Option<String>,
    pub download_count: Option<String>,
    pub version: Option<String>,
    pub dependencies: Option<String>,
}

impl FeedEntry {
    pub fn new(
        id: Option<String>,
        download_count: Option<String>,
        version: Option<String>,
        dependencies: Option<String>,
    ) -> Self {
        Self {
            id,
            download_count,
            version,
            dependencies,
        }
    }
}

/// FeedPage is one page of a paginated feed
///
/// A page is returned by value from every fetch and never modified, so
/// nothing carries over between iterations except the continuation link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedPage {
    entries: Vec<FeedEntry>,
    next_link: Option<String>,
}

impl FeedPage {
    pub fn new(entries: Vec<FeedEntry>, next_link: Option<String>) -> Self {
        Self {
            entries,
            next_link,
        }
    }

    pub fn entries(&self) -> &[FeedEntry] {
        &self.entries
    }

    /// The already-unescaped URI of the next page, if any
    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
