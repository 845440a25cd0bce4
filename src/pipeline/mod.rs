//! Pipeline stages for the daily ingest run.
//!
//! - `locate`: compute the daily index URL from a date
//! - `extract`: decompress the downloaded archive
//! - `parse`: turn the plain-text index into filing records
//! - `ingest`: deduplicate, fetch text, and persist each record
//! - `run_daily`: drive the full sequence

pub mod extract;
pub mod ingest;
pub mod locate;
pub mod parse;
mod pipeline;

pub use pipeline::{RunSummary, run_daily};
