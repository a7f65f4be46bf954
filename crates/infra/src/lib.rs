//! Infrastructure: storage backends for reclamations and products.
//!
//! In-memory stores back development and tests. Postgres-backed stores live
//! behind the `postgres` feature so the default build carries no database
//! dependency.

pub mod store;

pub use store::in_memory::{InMemoryProductStore, InMemoryReclamationStore};
#[cfg(feature = "postgres")]
pub use store::postgres::{PostgresProductStore, PostgresReclamationStore, connect, ensure_schema};
pub use store::{ProductStore, ReclamationStore, StoreError};
