//! Multi-page listing fetch loop for `SearchApiClient`.

use leadscout_core::{FetchHalt, FetchedListings, ListingSource, SearchQuery};

use super::{SearchApiClient, PAGE_SIZE};

impl SearchApiClient {
    /// Fetches listings page by page until `max_results` is covered or the
    /// provider runs out.
    ///
    /// The `start` offset begins at 0 and advances by [`PAGE_SIZE`]. Paging
    /// stops when the offset reaches `max_results`, when a page is empty, or
    /// after a short page (which is kept). Pages are concatenated in order and
    /// the last full page is not trimmed, so the result may exceed
    /// `max_results` by up to `PAGE_SIZE - 1`.
    ///
    /// **Partial-result semantics**: a failing page ends pagination but keeps
    /// everything fetched so far; the failure is returned in
    /// [`FetchedListings::halted`]. `max_results <= 0` issues no requests.
    pub async fn fetch_all_listings(
        &self,
        query: &SearchQuery,
        max_results: i64,
    ) -> FetchedListings {
        let limit = usize::try_from(max_results).unwrap_or(0);
        let mut fetched = FetchedListings::default();
        let mut offset = 0usize;

        while offset < limit {
            let page = match self.fetch_page(query.as_str(), offset).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(
                        offset,
                        error = %e,
                        "search page failed; stopping pagination with partial results"
                    );
                    fetched.halted = Some(FetchHalt {
                        offset,
                        reason: e.to_string(),
                    });
                    break;
                }
            };

            let page_len = page.len();
            tracing::debug!(offset, page_len, "search page received");

            if page_len == 0 {
                break;
            }
            fetched.listings.extend(page);
            if page_len < PAGE_SIZE {
                break;
            }

            offset += PAGE_SIZE;
        }

        fetched
    }
}

impl ListingSource for SearchApiClient {
    async fn fetch_listings(&self, query: &SearchQuery, max_results: i64) -> FetchedListings {
        self.fetch_all_listings(query, max_results).await
    }
}
