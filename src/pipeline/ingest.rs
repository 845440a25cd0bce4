// src/pipeline/ingest.rs

//! Deduplicating store writer.
//!
//! For each parsed filing: check the store first (no text fetch for known
//! accessions), fetch the full text, stamp the ingestion time, and insert.
//! Every failure is local to its record; the run always continues.

use chrono::Utc;

use crate::models::Filing;
use crate::services::TextFetcher;
use crate::storage::FilingStore;

/// Aggregate result of the per-record ingest loop.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IngestOutcome {
    /// Records persisted this run
    pub inserted: usize,

    /// Records whose accession was already stored
    pub duplicates: usize,

    /// Records dropped because their text could not be retrieved
    pub fetch_failures: usize,

    /// Records dropped because the store lookup or insert failed
    pub store_failures: usize,
}

/// Ingest parsed filings into the store, skipping known accessions.
///
/// A filing whose text fetch fails is not persisted and stays eligible for
/// insertion on a later run.
pub async fn ingest_filings(
    fetcher: &dyn TextFetcher,
    store: &dyn FilingStore,
    filings: Vec<Filing>,
) -> IngestOutcome {
    let mut outcome = IngestOutcome::default();

    for mut filing in filings {
        match store.find_by_accession(&filing.accession).await {
            Ok(Some(_)) => {
                outcome.duplicates += 1;
                continue;
            }
            Ok(None) => {}
            Err(e) => {
                log::warn!("Store lookup failed for {}: {}", filing.accession, e);
                outcome.store_failures += 1;
                continue;
            }
        }

        let Some(text) = fetcher.fetch_text(&filing.file_url).await else {
            outcome.fetch_failures += 1;
            continue;
        };

        filing.ingested_at = Some(Utc::now());
        filing.raw_text = Some(text);

        match store.insert_new(&filing).await {
            Ok(true) => outcome.inserted += 1,
            Ok(false) => outcome.duplicates += 1,
            Err(e) => {
                log::warn!("Insert failed for {}: {}", filing.accession, e);
                outcome.store_failures += 1;
            }
        }
    }

    outcome
}
