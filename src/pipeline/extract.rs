// src/pipeline/extract.rs

//! Gzip extraction for the downloaded index archive.

use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::{AppError, Result};

/// Extract a single-member gzip file fully to `dst`.
///
/// The stream is copied through fixed-size buffers, never loaded whole into
/// memory. Decompression is synchronous, so it runs on the blocking pool.
pub async fn decompress_gz(src: &Path, dst: &Path) -> Result<()> {
    let src = src.to_path_buf();
    let dst = dst.to_path_buf();

    tokio::task::spawn_blocking(move || -> Result<()> {
        let input = std::fs::File::open(&src)?;
        let mut decoder = GzDecoder::new(BufReader::new(input));
        let mut output = BufWriter::new(std::fs::File::create(&dst)?);

        std::io::copy(&mut decoder, &mut output)
            .map_err(|e| AppError::extraction(format!("{}: {}", src.display(), e)))?;
        output.flush()?;

        Ok(())
    })
    .await
    .map_err(|e| AppError::extraction(format!("decompression task failed: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use tempfile::TempDir;

    fn write_gz(path: &Path, content: &[u8]) {
        let file = std::fs::File::create(path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(content).unwrap();
        encoder.finish().unwrap();
    }

    #[tokio::test]
    async fn test_decompress_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let gz_path = tmp.path().join("master.20240105.idx.gz");
        let idx_path = tmp.path().join("master.20240105.idx");

        let content = b"0001|Acme Co|10-K|2024-01-05|edgar/data/1/acme-10k.txt\n";
        write_gz(&gz_path, content);

        decompress_gz(&gz_path, &idx_path).await.unwrap();
        assert_eq!(std::fs::read(&idx_path).unwrap(), content);
    }

    #[tokio::test]
    async fn test_decompress_empty_member() {
        let tmp = TempDir::new().unwrap();
        let gz_path = tmp.path().join("empty.gz");
        let idx_path = tmp.path().join("empty.idx");

        write_gz(&gz_path, b"");

        decompress_gz(&gz_path, &idx_path).await.unwrap();
        assert_eq!(std::fs::read(&idx_path).unwrap(), b"");
    }

    #[tokio::test]
    async fn test_invalid_gzip_is_an_extraction_error() {
        let tmp = TempDir::new().unwrap();
        let gz_path = tmp.path().join("bogus.gz");
        let idx_path = tmp.path().join("bogus.idx");

        std::fs::write(&gz_path, b"this is not a gzip stream").unwrap();

        let err = decompress_gz(&gz_path, &idx_path).await.unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[tokio::test]
    async fn test_missing_source_is_an_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = decompress_gz(&tmp.path().join("absent.gz"), &tmp.path().join("out"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
