//! Storage abstraction for filing persistence.
//!
//! The store is a logically append-only document collection keyed by
//! accession: documents are inserted at most once and never updated or
//! deleted afterwards.

pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Filing;

// Re-export for convenience
pub use local::LocalStore;

/// Trait for filing store backends.
#[async_trait]
pub trait FilingStore: Send + Sync {
    /// Look up a stored filing by its accession identifier.
    async fn find_by_accession(&self, accession: &str) -> Result<Option<Filing>>;

    /// Insert a filing if no document exists for its accession.
    ///
    /// Returns `false` when the accession is already present. Uniqueness is
    /// enforced at the storage layer, so concurrent runs cannot both insert
    /// the same accession.
    async fn insert_new(&self, filing: &Filing) -> Result<bool>;
}
