//! Local filesystem store implementation.
//!
//! One pretty-printed JSON document per accession:
//!
//! ```text
//! {data_dir}/
//! ├── 0001-acme-10k.json
//! └── 0002-beta-8k.json
//! ```
//!
//! `insert_new` stages the full document in a temp file and publishes it with
//! a no-clobber hard link, so the existence check and the insert are a single
//! atomic filesystem operation and a partial write can never land under the
//! accession's final name.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::Filing;
use crate::storage::FilingStore;

/// Filing store backed by a local directory.
#[derive(Clone)]
pub struct LocalStore {
    root_dir: PathBuf,
}

impl LocalStore {
    /// Create a new store rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Document path for an accession.
    fn document_path(&self, accession: &str) -> PathBuf {
        self.root_dir.join(format!("{}.json", accession))
    }

    async fn ensure_root(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root_dir).await?;
        Ok(())
    }
}

#[async_trait]
impl FilingStore for LocalStore {
    async fn find_by_accession(&self, accession: &str) -> Result<Option<Filing>> {
        let path = self.document_path(accession);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    async fn insert_new(&self, filing: &Filing) -> Result<bool> {
        self.ensure_root().await?;

        let path = self.document_path(&filing.accession);
        let bytes = serde_json::to_vec_pretty(filing)?;

        // Stage the complete document first; an interrupted write leaves only
        // a staging file, never a truncated document under the final name.
        let staged = self.root_dir.join(format!(
            ".{}.json.{}.tmp",
            filing.accession,
            std::process::id()
        ));

        let result = async {
            let mut file = tokio::fs::File::create(&staged).await?;
            file.write_all(&bytes).await?;
            file.flush().await?;
            drop(file);

            // hard_link fails with AlreadyExists if another writer got here
            // first, so uniqueness stays enforced at the storage layer
            match tokio::fs::hard_link(&staged, &path).await {
                Ok(()) => Ok(true),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
                Err(e) => Err(AppError::store(&filing.accession, e)),
            }
        }
        .await;

        let _ = tokio::fs::remove_file(&staged).await;
        result
    }
}
