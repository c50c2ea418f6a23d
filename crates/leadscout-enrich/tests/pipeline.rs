//! End-to-end tests for `LeadPipeline` with in-memory collaborators.
//!
//! Each fake records its calls in an `Arc`-shared log so assertions can be made
//! after the fake has been moved into the pipeline.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use leadscout_core::{
    FetchHalt, FetchedListings, Listing, ListingSource, NoopObserver, PageProber, ProbeOutcome,
    ProgressObserver, QueryNormalizer, ResultRecord, SearchQuery,
};
use leadscout_enrich::{LeadPipeline, PipelineError};

#[derive(Debug, thiserror::Error)]
#[error("connection refused")]
struct TransportError;

struct FakeNormalizer {
    fail: bool,
    calls: Arc<AtomicUsize>,
}

impl FakeNormalizer {
    fn ok() -> Self {
        Self {
            fail: false,
            calls: Arc::default(),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            calls: Arc::default(),
        }
    }
}

impl QueryNormalizer for FakeNormalizer {
    type Error = TransportError;

    async fn normalize(&self, prompt: &str) -> Result<SearchQuery, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(TransportError)
        } else {
            Ok(SearchQuery::new(format!("clean: {prompt}")))
        }
    }
}

struct FakeSource {
    listings: Vec<Listing>,
    halted: Option<FetchHalt>,
    queries: Arc<Mutex<Vec<(String, i64)>>>,
}

impl FakeSource {
    fn returning(listings: Vec<Listing>) -> Self {
        Self {
            listings,
            halted: None,
            queries: Arc::default(),
        }
    }
}

impl ListingSource for FakeSource {
    async fn fetch_listings(&self, query: &SearchQuery, max_results: i64) -> FetchedListings {
        self.queries
            .lock()
            .unwrap()
            .push((query.as_str().to_string(), max_results));
        FetchedListings {
            listings: self.listings.clone(),
            halted: self.halted.clone(),
        }
    }
}

/// Replies with an email only for `hit`; every other URL is `nothing here`.
struct FakeProber {
    hit: Option<(String, String)>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeProber {
    fn new(hit: Option<(&str, &str)>) -> Self {
        Self {
            hit: hit.map(|(u, e)| (u.to_string(), e.to_string())),
            calls: Arc::default(),
        }
    }
}

impl PageProber for FakeProber {
    async fn probe_page(&self, url: &str) -> ProbeOutcome {
        self.calls.lock().unwrap().push(url.to_string());
        match &self.hit {
            Some((hit_url, email)) if hit_url == url => ProbeOutcome::Found(email.clone()),
            _ => ProbeOutcome::from_reply("nothing here"),
        }
    }
}

#[derive(Default)]
struct CountingObserver {
    fetched: Mutex<Option<usize>>,
    halts: Mutex<Vec<usize>>,
    resolved: AtomicUsize,
}

impl ProgressObserver for CountingObserver {
    fn listings_fetched(&self, count: usize) {
        *self.fetched.lock().unwrap() = Some(count);
    }

    fn listing_resolved(&self, _index: usize, _total: usize, _record: &ResultRecord) {
        self.resolved.fetch_add(1, Ordering::SeqCst);
    }

    fn search_halted(&self, offset: usize, _reason: &str) {
        self.halts.lock().unwrap().push(offset);
    }
}

fn business(title: &str, website: Option<&str>) -> Listing {
    Listing {
        title: title.to_string(),
        website: website.map(str::to_string),
        ..Listing::default()
    }
}

#[tokio::test]
async fn normalization_failure_is_surfaced_with_its_cause() {
    let source = FakeSource::returning(vec![business("A", None)]);
    let prober = FakeProber::new(None);
    let pipeline = LeadPipeline::new(FakeNormalizer::failing(), source, prober);

    let result = pipeline
        .run("best dentists near me", 20, &NoopObserver)
        .await;

    assert!(
        matches!(result, Err(PipelineError::Normalization(_))),
        "expected Normalization error, got: {result:?}"
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("connection refused"));
}

#[tokio::test]
async fn normalization_failure_issues_no_search_call() {
    let source = FakeSource::returning(Vec::new());
    let searches = Arc::clone(&source.queries);
    let pipeline = LeadPipeline::new(FakeNormalizer::failing(), source, FakeProber::new(None));

    let _ = pipeline.run("dentists", 20, &NoopObserver).await;

    assert!(searches.lock().unwrap().is_empty());
}

#[tokio::test]
async fn blank_prompt_is_rejected_before_any_call() {
    let normalizer = FakeNormalizer::ok();
    let normalizations = Arc::clone(&normalizer.calls);
    let pipeline = LeadPipeline::new(
        normalizer,
        FakeSource::returning(Vec::new()),
        FakeProber::new(None),
    );

    let result = pipeline.run("   \n", 20, &NoopObserver).await;

    assert!(matches!(result, Err(PipelineError::EmptyInput)));
    assert_eq!(normalizations.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn contact_page_email_is_resolved_end_to_end() {
    let source = FakeSource::returning(vec![
        business("Biz", Some("https://biz.example")),
        business("No Site", None),
    ]);
    let searches = Arc::clone(&source.queries);
    let prober = FakeProber::new(Some(("https://biz.example/contact", "jane@biz.example")));
    let probes = Arc::clone(&prober.calls);
    let pipeline = LeadPipeline::new(FakeNormalizer::ok(), source, prober);
    let observer = CountingObserver::default();

    let report = pipeline
        .run("  best dentists in Pune  ", 45, &observer)
        .await
        .expect("run should succeed");

    assert_eq!(report.query.as_str(), "clean: best dentists in Pune");
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.records[0].email, "jane@biz.example");
    assert_eq!(report.records[1].email, "Not found");
    assert!(report.search_halted.is_none());
    assert_eq!(*observer.fetched.lock().unwrap(), Some(2));
    assert_eq!(observer.resolved.load(Ordering::SeqCst), 2);
    assert_eq!(
        *searches.lock().unwrap(),
        vec![("clean: best dentists in Pune".to_string(), 45)]
    );
    // Root, then /contact; the listing without a website is never probed.
    assert_eq!(
        *probes.lock().unwrap(),
        vec!["https://biz.example", "https://biz.example/contact"]
    );
}

#[tokio::test]
async fn search_halt_is_reported_and_partial_results_are_kept() {
    let mut source = FakeSource::returning(vec![business("A", None)]);
    source.halted = Some(FetchHalt {
        offset: 20,
        reason: "unexpected HTTP status 502".to_string(),
    });
    let pipeline = LeadPipeline::new(FakeNormalizer::ok(), source, FakeProber::new(None));
    let observer = CountingObserver::default();

    let report = pipeline
        .run("dentists", 60, &observer)
        .await
        .expect("a search halt is not fatal");

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.search_halted.map(|h| h.offset), Some(20));
    assert_eq!(*observer.halts.lock().unwrap(), vec![20]);
}

#[tokio::test]
async fn empty_search_yields_empty_report() {
    let pipeline = LeadPipeline::new(
        FakeNormalizer::ok(),
        FakeSource::returning(Vec::new()),
        FakeProber::new(None),
    );

    let report = pipeline
        .run("dentists", 0, &NoopObserver)
        .await
        .expect("run should succeed");

    assert!(report.records.is_empty());
}
