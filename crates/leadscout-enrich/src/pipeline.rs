//! End-to-end run: prompt → search query → listings → result records.

use leadscout_core::{
    FetchHalt, FetchedListings, ListingSource, PageProber, ProgressObserver, QueryNormalizer,
    ResultRecord, SearchQuery,
};

use crate::assemble::assemble;
use crate::email::EmailResolver;
use crate::error::PipelineError;

/// Everything a completed run produced.
#[derive(Debug)]
pub struct RunReport {
    pub query: SearchQuery,
    pub records: Vec<ResultRecord>,
    /// Set when a search page failed and pagination stopped early.
    pub search_halted: Option<FetchHalt>,
}

/// The three external collaborators of a run, wired together.
pub struct LeadPipeline<N, S, P> {
    normalizer: N,
    source: S,
    prober: P,
}

impl<N, S, P> LeadPipeline<N, S, P>
where
    N: QueryNormalizer,
    S: ListingSource,
    P: PageProber,
{
    #[must_use]
    pub fn new(normalizer: N, source: S, prober: P) -> Self {
        Self {
            normalizer,
            source,
            prober,
        }
    }

    /// Runs the whole pipeline for one prompt.
    ///
    /// Only an empty prompt or a failed normalization aborts the run; both
    /// happen before any search request. Search-page and probe failures are
    /// reported to `observer` and the run still completes, possibly with an
    /// empty record list.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::EmptyInput`] if `prompt` is blank.
    /// - [`PipelineError::Normalization`] if the query could not be produced.
    pub async fn run<O>(
        &self,
        prompt: &str,
        max_results: i64,
        observer: &O,
    ) -> Result<RunReport, PipelineError>
    where
        O: ProgressObserver + ?Sized,
    {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        let query = self
            .normalizer
            .normalize(prompt)
            .await
            .map_err(|e| PipelineError::Normalization(Box::new(e)))?;
        tracing::info!(query = %query, max_results, "searching listings");
        observer.query_normalized(&query);

        let FetchedListings { listings, halted } =
            self.source.fetch_listings(&query, max_results).await;
        if let Some(halt) = &halted {
            observer.search_halted(halt.offset, &halt.reason);
        }
        observer.listings_fetched(listings.len());

        let resolver = EmailResolver::new(&self.prober, observer);
        let records = assemble(listings, &resolver, observer).await;

        tracing::info!(records = records.len(), "run complete");
        Ok(RunReport {
            query,
            records,
            search_halted: halted,
        })
    }
}
