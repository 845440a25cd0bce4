// src/pipeline/parse.rs

//! Daily index parsing.
//!
//! The extracted index is plain text: a banner/header section followed by
//! data lines of the form `CIK|Company Name|Form Type|Date Filed|Filename`.
//! Lines that do not fit that shape are tolerated and counted, never fatal.

use std::collections::HashSet;
use std::path::Path;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::Result;
use crate::models::{Filing, accession_from_filename};

/// Result of one parse pass over an index file.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    /// Records whose form type is in the accepted set
    pub filings: Vec<Filing>,

    /// Header/banner lines without a delimiter
    pub skipped_no_delimiter: usize,

    /// Delimited lines that did not split into exactly five fields
    pub skipped_malformed: usize,

    /// Well-formed lines with a form type outside the accepted set
    pub skipped_form: usize,
}

impl ParseOutcome {
    /// Total number of lines dropped by the tolerance policy.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_no_delimiter + self.skipped_malformed + self.skipped_form
    }
}

/// Parse an extracted index file into filing records.
///
/// The file is read line by line; undecodable byte sequences are replaced
/// per line rather than failing the parse. The result is fully materialized;
/// callers need the counts up front.
pub async fn parse_index(
    path: &Path,
    archive_url: &str,
    accepted_forms: &HashSet<String>,
) -> Result<ParseOutcome> {
    let file = tokio::fs::File::open(path).await?;
    let mut reader = BufReader::new(file);

    let archive_root = archive_url.trim_end_matches('/');
    let mut outcome = ParseOutcome::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let decoded = String::from_utf8_lossy(&buf);
        let line = decoded.trim_end_matches(['\n', '\r']);

        if !line.contains('|') {
            outcome.skipped_no_delimiter += 1;
            continue;
        }

        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        let [cik, company, form_type, date_filed, filename] = fields[..] else {
            outcome.skipped_malformed += 1;
            continue;
        };

        if !accepted_forms.contains(form_type) {
            outcome.skipped_form += 1;
            continue;
        }

        outcome.filings.push(Filing {
            cik: cik.to_string(),
            company: company.to_string(),
            form_type: form_type.to_string(),
            date_filed: date_filed.to_string(),
            accession: accession_from_filename(filename),
            file_url: format!("{}/{}", archive_root, filename),
            ingested_at: None,
            raw_text: None,
        });
    }

    Ok(outcome)
}
