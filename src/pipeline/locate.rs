// src/pipeline/locate.rs

//! Daily index location.
//!
//! The EDGAR daily index lives under `<root>/<year>/QTR<q>/` with one
//! compressed master file per publication day.

use chrono::{Datelike, NaiveDate};

/// Remote location of one day's compressed index file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexLocation {
    /// Full URL of the archive
    pub url: String,

    /// Archive filename, `master.<YYYYMMDD>.idx.gz`
    pub filename: String,
}

/// Compute the expected location of the daily index for a date.
///
/// Pure function of the date; whether the resource actually exists is only
/// discovered at download time.
pub fn daily_index(base_url: &str, date: NaiveDate) -> IndexLocation {
    let quarter = (date.month() - 1) / 3 + 1;
    let filename = format!("master.{}.idx.gz", date.format("%Y%m%d"));
    let url = format!(
        "{}/{}/QTR{}/{}",
        base_url.trim_end_matches('/'),
        date.year(),
        quarter,
        filename
    );

    IndexLocation { url, filename }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.sec.gov/Archives/edgar/daily-index";

    #[test]
    fn test_url_shape() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let location = daily_index(BASE, date);

        assert_eq!(
            location.url,
            "https://www.sec.gov/Archives/edgar/daily-index/2024/QTR1/master.20240105.idx.gz"
        );
        assert_eq!(location.filename, "master.20240105.idx.gz");
    }

    #[test]
    fn test_quarter_for_every_month() {
        for month in 1..=12u32 {
            let date = NaiveDate::from_ymd_opt(2024, month, 15).unwrap();
            let location = daily_index(BASE, date);

            let expected = (month - 1) / 3 + 1;
            assert!((1..=4).contains(&expected));
            assert!(
                location.url.contains(&format!("/QTR{}/", expected)),
                "month {} should map to QTR{}: {}",
                month,
                expected,
                location.url
            );
        }
    }

    #[test]
    fn test_filename_encodes_date_as_eight_digits() {
        let date = NaiveDate::from_ymd_opt(2023, 9, 1).unwrap();
        let location = daily_index(BASE, date);
        assert_eq!(location.filename, "master.20230901.idx.gz");

        let digits: String = location
            .filename
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        assert_eq!(digits.len(), 8);
    }

    #[test]
    fn test_trailing_slash_on_base_url() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let location = daily_index("https://example.com/daily-index/", date);
        assert_eq!(
            location.url,
            "https://example.com/daily-index/2024/QTR3/master.20240701.idx.gz"
        );
    }
}
