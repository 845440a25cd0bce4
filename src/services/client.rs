// src/services/client.rs

//! EDGAR HTTP client.
//!
//! Every outbound request carries the configured contact-bearing User-Agent,
//! as required by the SEC's fair access policy.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::EdgarConfig;

/// Text retrieval for individual filings.
///
/// Failures are local to the record: implementations log the cause and return
/// `None` so the caller can skip the filing rather than abort the run.
#[async_trait]
pub trait TextFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Option<String>;
}

/// HTTP client for the EDGAR archive.
pub struct EdgarClient {
    client: reqwest::Client,
    download_timeout: Duration,
}

impl EdgarClient {
    /// Create a new client with the configured identity and timeouts.
    pub fn new(config: &EdgarConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            download_timeout: Duration::from_secs(config.download_timeout_secs),
        })
    }

    /// Download a remote resource to a file, streaming the body chunk by
    /// chunk. Fails with a download error on any non-success status.
    pub async fn download_to_file(&self, url: &str, dest: &Path) -> Result<()> {
        log::info!("Downloading {}", url);

        let response = self
            .client
            .get(url)
            .timeout(self.download_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::download(url, status.as_u16()));
        }

        let mut file = tokio::fs::File::create(dest).await?;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            file.write_all(&chunk?).await?;
        }
        file.flush().await?;

        Ok(())
    }
}

#[async_trait]
impl TextFetcher for EdgarClient {
    async fn fetch_text(&self, url: &str) -> Option<String> {
        match self.client.get(url).send().await {
            Ok(response) if response.status().is_success() => match response.text().await {
                Ok(text) => Some(text),
                Err(e) => {
                    log::error!("Exception reading filing body {}: {}", url, e);
                    None
                }
            },
            Ok(response) => {
                log::warn!(
                    "Failed to fetch filing text ({}): {}",
                    response.status(),
                    url
                );
                None
            }
            Err(e) => {
                log::error!("Exception fetching {}: {}", url, e);
                None
            }
        }
    }
}
