//! In-memory collaborators for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use leadscout_core::{Listing, PageProber, ProbeOutcome, ProgressObserver, ResultRecord};

/// Prober answering from a fixed URL → outcome table; unknown URLs reply
/// `nothing here`. Records every probed URL.
#[derive(Default)]
pub(crate) struct FakeProber {
    replies: HashMap<String, ProbeOutcome>,
    fail_all: bool,
    calls: Mutex<Vec<String>>,
}

impl FakeProber {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, url: &str, email: &str) -> Self {
        self.replies
            .insert(url.to_string(), ProbeOutcome::Found(email.to_string()));
        self
    }

    pub(crate) fn failing(mut self, url: &str) -> Self {
        self.replies.insert(
            url.to_string(),
            ProbeOutcome::Failed("connection reset".to_string()),
        );
        self
    }

    pub(crate) fn fail_everything(mut self) -> Self {
        self.fail_all = true;
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PageProber for FakeProber {
    async fn probe_page(&self, url: &str) -> ProbeOutcome {
        self.calls.lock().unwrap().push(url.to_string());
        if self.fail_all {
            return ProbeOutcome::Failed("timed out".to_string());
        }
        self.replies
            .get(url)
            .cloned()
            .unwrap_or(ProbeOutcome::NothingHere)
    }
}

#[derive(Default)]
pub(crate) struct RecordingObserver {
    events: Mutex<Vec<String>>,
    probe_failures: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub(crate) fn probe_failures(&self) -> Vec<String> {
        self.probe_failures.lock().unwrap().clone()
    }
}

impl ProgressObserver for RecordingObserver {
    fn listing_started(&self, index: usize, total: usize, listing: &Listing) {
        self.events
            .lock()
            .unwrap()
            .push(format!("started {index}/{total} {}", listing.title));
    }

    fn listing_resolved(&self, index: usize, total: usize, record: &ResultRecord) {
        self.events
            .lock()
            .unwrap()
            .push(format!("resolved {index}/{total} {}", record.email));
    }

    fn probe_failed(&self, url: &str, _error: &str) {
        self.probe_failures.lock().unwrap().push(url.to_string());
    }
}
