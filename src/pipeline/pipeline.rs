// src/pipeline/pipeline.rs

//! Full daily ingest run.

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::Config;
use crate::services::EdgarClient;
use crate::storage::FilingStore;

use super::extract::decompress_gz;
use super::ingest::{IngestOutcome, ingest_filings};
use super::locate::daily_index;
use super::parse::parse_index;

/// Summary of one pipeline run.
#[derive(Debug)]
pub struct RunSummary {
    /// Date of the ingested index
    pub date: NaiveDate,

    /// Records parsed from the index with an accepted form type
    pub parsed: usize,

    /// Index lines dropped by the parser's tolerance policy
    pub skipped_lines: usize,

    /// Per-record ingest counters
    pub ingest: IngestOutcome,
}

/// Run the full pipeline for one day's index.
///
/// Download, extraction, and parsing work inside a scoped temporary directory
/// that is removed on every exit path. Archive-stage failures abort the run
/// and propagate; per-record failures only show up in the summary counters.
pub async fn run_daily(
    config: &Config,
    client: &EdgarClient,
    store: &dyn FilingStore,
    date: NaiveDate,
) -> Result<RunSummary> {
    let location = daily_index(&config.edgar.daily_index_url, date);

    let tmpdir = tempfile::tempdir()?;
    let gz_path = tmpdir.path().join(&location.filename);
    // master.YYYYMMDD.idx.gz -> master.YYYYMMDD.idx
    let idx_path = gz_path.with_extension("");

    client.download_to_file(&location.url, &gz_path).await?;
    decompress_gz(&gz_path, &idx_path).await?;

    let parsed = parse_index(&idx_path, &config.edgar.archive_url, &config.edgar.form_set()).await?;
    log::info!(
        "Parsed {} filings from {} ({} lines skipped)",
        parsed.filings.len(),
        location.filename,
        parsed.skipped_lines()
    );
    log::debug!(
        "Skip breakdown: {} without delimiter, {} malformed, {} rejected forms",
        parsed.skipped_no_delimiter,
        parsed.skipped_malformed,
        parsed.skipped_form
    );

    let summary = RunSummary {
        date,
        parsed: parsed.filings.len(),
        skipped_lines: parsed.skipped_lines(),
        ingest: ingest_filings(client, store, parsed.filings).await,
    };

    log::info!(
        "Inserted {} new filings ({} duplicates, {} fetch failures, {} store failures)",
        summary.ingest.inserted,
        summary.ingest.duplicates,
        summary.ingest.fetch_failures,
        summary.ingest.store_failures
    );

    Ok(summary)
}
