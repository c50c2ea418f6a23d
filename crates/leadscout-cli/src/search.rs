//! Handler for `leadscout search`.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use leadscout_core::{ListingSource, PageProber, QueryNormalizer, ResultRecord};
use leadscout_enrich::{LeadPipeline, PipelineError};
use leadscout_llm::{OpenAiProber, TogetherClient};
use leadscout_search::SearchApiClient;

use crate::output::{render_table, write_csv_file};
use crate::progress::TerminalProgress;

/// Printed instead of a table when a run produced no records.
const NO_RESULTS: &str = "No results found.";

/// Builds the three API clients from `config` and runs [`execute`] with the
/// results going to stdout.
///
/// # Errors
///
/// Returns an error if a client cannot be built, or whatever [`execute`]
/// returns.
pub(crate) async fn run_search(
    config: &leadscout_core::AppConfig,
    prompt: &str,
    count: i64,
    csv_path: Option<&Path>,
) -> anyhow::Result<()> {
    let normalizer = TogetherClient::with_base_url(
        &config.together_api_key,
        config.request_timeout_secs,
        &config.together_base_url,
    )
    .context("failed to build Together client")?;
    let search = SearchApiClient::with_base_url(
        &config.search_api_key,
        config.request_timeout_secs,
        &config.searchapi_base_url,
    )
    .context("failed to build SearchAPI client")?;
    let prober = OpenAiProber::with_base_url(
        &config.openai_api_key,
        config.probe_timeout_secs,
        &config.openai_base_url,
    )
    .context("failed to build OpenAI client")?;

    let pipeline = LeadPipeline::new(normalizer, search, prober);
    execute(&pipeline, prompt, count, csv_path, &mut io::stdout()).await
}

/// Runs `pipeline` for `prompt`, writes the result table to `out`, and
/// optionally exports the records as CSV.
///
/// # Errors
///
/// Returns an error for a blank prompt, a failed query normalization, or a
/// CSV file that cannot be written. Search-page and probe failures are
/// printed as warnings and do not fail the command.
pub(crate) async fn execute<N, S, P, W>(
    pipeline: &LeadPipeline<N, S, P>,
    prompt: &str,
    count: i64,
    csv_path: Option<&Path>,
    out: &mut W,
) -> anyhow::Result<()>
where
    N: QueryNormalizer,
    S: ListingSource,
    P: PageProber,
    W: Write,
{
    eprintln!("extracting clean query...");
    let report = match pipeline.run(prompt, count, &TerminalProgress).await {
        Ok(report) => report,
        Err(PipelineError::EmptyInput) => anyhow::bail!("Please enter a valid prompt."),
        Err(e) => return Err(e.into()),
    };

    write!(out, "{}", render_report(&report.records))?;
    if report.records.is_empty() {
        return Ok(());
    }
    eprintln!("all emails scraped.");

    if let Some(path) = csv_path {
        write_csv_file(path, &report.records)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("wrote {} rows to {}", report.records.len(), path.display());
    }

    Ok(())
}

/// The text printed for a finished run: the result table, or a notice when
/// there is nothing to show.
pub(crate) fn render_report(records: &[ResultRecord]) -> String {
    if records.is_empty() {
        format!("{NO_RESULTS}\n")
    } else {
        render_table(records)
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
