//! Persistence traits shared by every backend.

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use comptoir_catalog::{NewProduct, Product};
use comptoir_support::{NewReclamation, Reclamation};

/// Storage-level failure. Handlers treat every variant as an internal error;
/// the split only matters for logs.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Lock or connection-level failure.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backing store rejected or failed the operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Reclamation persistence.
#[async_trait]
pub trait ReclamationStore: Send + Sync {
    /// Store a validated submission, stamping the id and creation time.
    async fn create(&self, entry: NewReclamation) -> Result<Reclamation, StoreError>;

    /// All stored reclamations, newest first.
    async fn list_recent(&self) -> Result<Vec<Reclamation>, StoreError>;
}

/// Product persistence.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Store a validated product, stamping the id.
    async fn create(&self, entry: NewProduct) -> Result<Product, StoreError>;

    /// All stored products, in insertion order.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;
}
