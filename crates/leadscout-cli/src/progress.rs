//! Terminal progress reporting for a run. Everything goes to stderr so the
//! result table on stdout stays clean.

use leadscout_core::{Listing, ProgressObserver, ResultRecord, SearchQuery};

pub(crate) struct TerminalProgress;

impl ProgressObserver for TerminalProgress {
    fn query_normalized(&self, query: &SearchQuery) {
        eprintln!("searching maps for: `{query}`");
    }

    fn listings_fetched(&self, count: usize) {
        if count > 0 {
            eprintln!("found {count} listings. scraping emails...");
        }
    }

    fn listing_started(&self, index: usize, total: usize, listing: &Listing) {
        let percent = (index + 1) * 100 / total.max(1);
        eprintln!("[{percent:>3}%] scraping email from: {}", listing.title);
    }

    fn probe_failed(&self, url: &str, error: &str) {
        eprintln!("warning: email lookup failed for {url}: {error}");
    }

    fn search_halted(&self, offset: usize, reason: &str) {
        eprintln!("warning: search stopped at offset {offset}: {reason}");
    }

    fn listing_resolved(&self, _index: usize, _total: usize, record: &ResultRecord) {
        tracing::debug!(title = %record.title, email = %record.email, "listing resolved");
    }
}
