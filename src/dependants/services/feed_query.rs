use crate::dependants::domain::PackageId;

/// Default NuGet v1 OData feed
pub const DEFAULT_FEED_URL: &str = "https://packages.nuget.org/v1/FeedService.svc/Packages";

/// Number of entries the feed returns per page
pub const FEED_PAGE_SIZE: u64 = 100;

/// FeedQuery service for building OData query URIs against a package feed
///
/// The dependants filter is `IsLatestVersion and substringof('<id>', Dependencies)`,
/// ordered by download count. The count URI uses the same filter against
/// the `$count` endpoint so that the total matches what the page walk yields.
#[derive(Debug, Clone)]
pub struct FeedQuery {
    base_url: String,
}

impl FeedQuery {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URI listing every published version of `package`
    pub fn package_uri(&self, package: &PackageId) -> String {
        let filter = format!("'{}' eq Id", package);
        format!("{}?$filter={}", self.base_url, urlencoding::encode(&filter))
    }

    /// URI of the first page of dependants of `package`
    pub fn dependants_uri(&self, package: &PackageId) -> String {
        format!("{}{}", self.base_url, Self::dependants_query(package))
    }

    /// URI returning the number of dependants of `package` as plain text
    pub fn dependants_count_uri(&self, package: &PackageId) -> String {
        format!("{}/$count{}", self.base_url, Self::dependants_query(package))
    }

    /// Number of pages expected for `count` entries
    pub fn expected_pages(count: u64) -> u64 {
        count.div_ceil(FEED_PAGE_SIZE)
    }

    fn dependants_query(package: &PackageId) -> String {
        let filter = format!(
            "IsLatestVersion and substringof('{}', Dependencies)",
            package
        );
        format!(
            "?$filter={}&$orderby={}",
            urlencoding::encode(&filter),
            urlencoding::encode("DownloadCount desc")
        )
    }
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL)
    }
}
