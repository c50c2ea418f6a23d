//! Traits for the external collaborators the lead pipeline depends on.
//!
//! The HTTP clients in `leadscout-search` and `leadscout-llm` implement these;
//! tests substitute in-memory fakes.

use std::future::Future;

use crate::listings::{FetchedListings, Listing, ProbeOutcome, ResultRecord, SearchQuery};

/// Rewrites a free-form user prompt into a maps search string.
pub trait QueryNormalizer {
    type Error: std::error::Error + Send + Sync + 'static;

    fn normalize(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<SearchQuery, Self::Error>> + Send;
}

/// Paginated business listings for a query.
///
/// Page failures are reported through [`FetchedListings::halted`], never as an
/// error: whatever was fetched before the failure is still returned.
pub trait ListingSource {
    fn fetch_listings(
        &self,
        query: &SearchQuery,
        max_results: i64,
    ) -> impl Future<Output = FetchedListings> + Send;
}

/// Asks a page reader for the first email address on one URL.
pub trait PageProber {
    fn probe_page(&self, url: &str) -> impl Future<Output = ProbeOutcome> + Send;
}

/// Progress hooks for a run. Every method defaults to a no-op.
///
/// `index` is zero-based; `total` is the number of listings in the run.
pub trait ProgressObserver {
    fn query_normalized(&self, _query: &SearchQuery) {}

    fn listings_fetched(&self, _count: usize) {}

    fn listing_started(&self, _index: usize, _total: usize, _listing: &Listing) {}

    fn listing_resolved(&self, _index: usize, _total: usize, _record: &ResultRecord) {}

    fn probe_failed(&self, _url: &str, _error: &str) {}

    fn search_halted(&self, _offset: usize, _reason: &str) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {}
