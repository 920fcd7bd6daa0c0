use crate::application::dto::{DependantsRequest, DependantsResponse};
use crate::dependants::domain::{
    DependantRecord, FeedEntry, FeedPage, PackageId, DOWNLOADS_SENTINEL,
};
use crate::dependants::services::{parse_downloads, DependencyEdgeParser, FeedQuery};
use crate::ports::outbound::{FeedClient, ProgressReporter};
use crate::shared::error::DependantsError;
use crate::shared::Result;

/// FindDependantsUseCase - the pagination engine
///
/// Runs the whole discovery strictly in sequence:
///
/// 1. resolve the target's published versions (informational)
/// 2. ask the `$count` endpoint how many dependants to expect (advisory)
/// 3. walk the dependants feed page by page, following each page's next
///    link until a page has none
///
/// Any failed request aborts the run. Records gathered from earlier pages
/// are dropped with the error, so callers never see a partial list.
///
/// # Type Parameters
/// * `FC` - FeedClient implementation
/// * `PR` - ProgressReporter implementation
pub struct FindDependantsUseCase<FC, PR> {
    feed_client: FC,
    progress_reporter: PR,
    query: FeedQuery,
}

impl<FC, PR> FindDependantsUseCase<FC, PR>
where
    FC: FeedClient,
    PR: ProgressReporter,
{
    /// Creates a new FindDependantsUseCase with injected dependencies
    pub fn new(feed_client: FC, progress_reporter: PR, query: FeedQuery) -> Self {
        Self {
            feed_client,
            progress_reporter,
            query,
        }
    }

    /// Executes the find-dependants use case
    ///
    /// # Arguments
    /// * `request` - Target package and page limit
    ///
    /// # Returns
    /// DependantsResponse with every dependant in feed order
    ///
    /// # Errors
    /// Returns an error if any request fails, the count is not an integer,
    /// an entry has no dependency naming the target, or the page limit is hit
    pub async fn execute(&self, request: DependantsRequest) -> Result<DependantsResponse> {
        // Step 1: Resolve versions of the target
        let versions = self.resolve_versions(&request.target).await?;

        // Step 2: Count dependants (progress only)
        let expected_count = self.count_dependants(&request.target).await?;

        // Step 3: Walk the paginated dependants feed
        let (records, pages_fetched) = self.collect_dependants(&request, expected_count).await?;

        self.progress_reporter.report_completion(&format!(
            "✅ Collected {} dependant(s) from {} page(s)",
            records.len(),
            pages_fetched
        ));

        Ok(DependantsResponse::new(
            request.target,
            versions,
            expected_count,
            pages_fetched,
            records,
        ))
    }

    /// Queries the feed for the target id and returns its published versions
    async fn resolve_versions(&self, target: &PackageId) -> Result<Vec<String>> {
        self.progress_reporter
            .report(&format!("🔍 Querying for package {}...", target));

        let uri = self.query.package_uri(target);
        tracing::debug!(%uri, "resolving versions");
        let page = self.feed_client.fetch_feed(&uri).await?;

        let versions: Vec<String> = page
            .entries()
            .iter()
            .filter_map(|entry| entry.version.clone())
            .collect();

        if versions.is_empty() {
            tracing::warn!(package = %target, "no published versions found");
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: No versions found for '{}'. Is the package id correct?",
                target
            ));
        } else {
            self.progress_reporter
                .report(&format!("   Found versions: {}", versions.join(", ")));
        }

        Ok(versions)
    }

    /// Reads the number of dependants from the `$count` endpoint
    async fn count_dependants(&self, target: &PackageId) -> Result<u64> {
        self.progress_reporter.report("🔢 Querying for dependant count...");

        let uri = self.query.dependants_count_uri(target);
        tracing::debug!(%uri, "counting dependants");
        let body = self.feed_client.fetch_text(&uri).await?;

        let count = body
            .trim()
            .parse::<u64>()
            .map_err(|_| DependantsError::InvalidCount {
                uri: uri.clone(),
                body: body.clone(),
            })?;

        self.progress_reporter
            .report(&format!("   {} package(s).", count));

        Ok(count)
    }

    /// Follows next links from the first dependants page until exhausted
    ///
    /// # Returns
    /// Tuple of (records in feed order, number of pages fetched)
    async fn collect_dependants(
        &self,
        request: &DependantsRequest,
        expected_count: u64,
    ) -> Result<(Vec<DependantRecord>, usize)> {
        let expected_pages = FeedQuery::expected_pages(expected_count) as usize;
        let mut records = Vec::new();
        let mut uri = self.query.dependants_uri(&request.target);

        for page_number in 1..=request.max_pages {
            self.progress_reporter.report_progress(
                page_number,
                expected_pages.max(page_number),
                Some(&format!(
                    "Querying for dependants [{}/{}]",
                    page_number, expected_pages
                )),
            );
            tracing::debug!(page = page_number, %uri, "fetching dependants page");

            let page = match self.feed_client.fetch_feed(&uri).await {
                Ok(page) => page,
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "❌ Failed to fetch dependants page {}",
                        page_number
                    ));
                    return Err(e);
                }
            };

            records.extend(Self::parse_dependants(&page, &request.target, &uri)?);
            tracing::debug!(
                page = page_number,
                entries = page.len(),
                total = records.len(),
                "page processed"
            );

            match page.next_link() {
                Some(next) => uri = next.to_string(),
                None => return Ok((records, page_number)),
            }
        }

        self.progress_reporter.report_error(&format!(
            "❌ Stopped after {} page(s) without reaching the end of the feed",
            request.max_pages
        ));
        Err(DependantsError::PageLimitExceeded {
            limit: request.max_pages,
        }
        .into())
    }

    /// Converts every entry of a page into a dependant record
    fn parse_dependants(
        page: &FeedPage,
        target: &PackageId,
        uri: &str,
    ) -> Result<Vec<DependantRecord>> {
        page.entries()
            .iter()
            .map(|entry| Self::parse_dependant(entry, target, uri))
            .collect()
    }

    fn parse_dependant(
        entry: &FeedEntry,
        target: &PackageId,
        uri: &str,
    ) -> Result<DependantRecord> {
        let id = entry
            .id
            .clone()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| DependantsError::MissingField {
                field: "Id".to_string(),
                uri: uri.to_string(),
            })?;

        let downloads = entry
            .download_count
            .as_deref()
            .map(parse_downloads)
            .unwrap_or(DOWNLOADS_SENTINEL);
        if downloads == DOWNLOADS_SENTINEL {
            tracing::warn!(
                dependant = %id,
                raw = ?entry.download_count,
                "download count is not an integer"
            );
        }

        let dependencies = entry.dependencies.as_deref().unwrap_or_default();
        let edge = DependencyEdgeParser::parse_our_edge(dependencies, target.as_str())
            .ok_or_else(|| DependantsError::DependencyEdgeNotFound {
                dependant: id.clone(),
                target: target.to_string(),
                dependencies: dependencies.to_string(),
            })?;

        Ok(DependantRecord::new(
            id,
            entry.version.clone().unwrap_or_default(),
            downloads,
            edge,
        ))
    }
}
