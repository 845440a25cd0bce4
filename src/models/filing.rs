//! Filing record data structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single regulatory filing listed in a daily index.
///
/// Built by the index parser from one pipe-delimited line; `ingested_at` and
/// `raw_text` stay empty until the store writer persists the record. A filing
/// is never persisted without its text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Filing {
    /// Central Index Key of the filer, opaque
    pub cik: String,

    /// Filer display name
    pub company: String,

    /// Form type code (e.g., "10-K")
    pub form_type: String,

    /// Filing date as presented in the source index
    pub date_filed: String,

    /// Unique accession identifier, derived from the index filename
    pub accession: String,

    /// Fully qualified URL of the filing's full text
    pub file_url: String,

    /// Timestamp assigned at insertion time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingested_at: Option<DateTime<Utc>>,

    /// Verbatim filing body, populated only when retrieval succeeds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

/// Derive the accession identifier from an index filename field.
///
/// Takes the final path segment and strips the trailing `.txt` suffix, e.g.
/// `edgar/data/1/acme-10k.txt` -> `acme-10k`.
pub fn accession_from_filename(filename: &str) -> String {
    let segment = filename.rsplit('/').next().unwrap_or(filename);
    segment
        .strip_suffix(".txt")
        .unwrap_or(segment)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accession_from_nested_path() {
        assert_eq!(
            accession_from_filename("edgar/data/1/acme-10k.txt"),
            "acme-10k"
        );
    }

    #[test]
    fn test_accession_without_directory() {
        assert_eq!(accession_from_filename("beta-8k.txt"), "beta-8k");
    }

    #[test]
    fn test_accession_without_suffix() {
        assert_eq!(accession_from_filename("edgar/data/2/plain"), "plain");
    }

    #[test]
    fn test_filing_roundtrip_skips_empty_optionals() {
        let filing = Filing {
            cik: "0001".into(),
            company: "Acme Co".into(),
            form_type: "10-K".into(),
            date_filed: "2024-01-05".into(),
            accession: "acme-10k".into(),
            file_url: "https://www.sec.gov/Archives/edgar/data/1/acme-10k.txt".into(),
            ingested_at: None,
            raw_text: None,
        };

        let json = serde_json::to_string(&filing).unwrap();
        assert!(!json.contains("raw_text"));
        assert!(!json.contains("ingested_at"));

        let back: Filing = serde_json::from_str(&json).unwrap();
        assert_eq!(back, filing);
    }
}
