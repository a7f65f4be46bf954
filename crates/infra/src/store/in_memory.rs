use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use comptoir_catalog::{NewProduct, Product, ProductId};
use comptoir_support::{NewReclamation, Reclamation, ReclamationId};

use super::{ProductStore, ReclamationStore, StoreError};

/// In-memory reclamation store.
///
/// Intended for tests/dev. Rows are stamped here, so insertion order doubles
/// as chronological order.
#[derive(Debug, Default)]
pub struct InMemoryReclamationStore {
    rows: RwLock<Vec<Reclamation>>,
}

impl InMemoryReclamationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReclamationStore for InMemoryReclamationStore {
    async fn create(&self, entry: NewReclamation) -> Result<Reclamation, StoreError> {
        let row = Reclamation {
            id: ReclamationId::new(),
            email: entry.email.into_string(),
            message: entry.message,
            date_created: Utc::now(),
        };
        let mut rows = self
            .rows
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        rows.push(row.clone());
        Ok(row)
    }

    async fn list_recent(&self) -> Result<Vec<Reclamation>, StoreError> {
        let rows = self
            .rows
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        Ok(rows.iter().rev().cloned().collect())
    }
}

/// In-memory product store.
///
/// Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    rows: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn create(&self, entry: NewProduct) -> Result<Product, StoreError> {
        let row = Product {
            id: ProductId::new(),
            name: entry.name,
            price: entry.price,
            stock: entry.stock,
        };
        let mut rows = self
            .rows
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        rows.push(row.clone());
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let rows = self
            .rows
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        Ok(rows.clone())
    }
}
