//! Postgres-backed stores.
//!
//! Uses the runtime query API with hand-written row mappings, so compiling
//! never needs a live database.
//!
//! ## Error Mapping
//!
//! SQLx errors are mapped to `StoreError` as follows:
//!
//! | SQLx Error | StoreError | Scenario |
//! |------------|------------|----------|
//! | Database | `Backend` | Constraint violations, bad SQL, server errors |
//! | PoolClosed / PoolTimedOut | `Unavailable` | Connection pool exhausted or shut down |
//! | Other | `Backend` | Network failures, decode errors |

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Row};
use tracing::instrument;

use comptoir_catalog::{NewProduct, Product, ProductId};
use comptoir_support::{NewReclamation, Reclamation, ReclamationId};

use super::{ProductStore, ReclamationStore, StoreError};

/// Connect a pool for the stores.
pub async fn connect(database_url: &str) -> Result<PgPool, StoreError> {
    PgPool::connect(database_url)
        .await
        .map_err(|e| map_sqlx_error("connect", e))
}

/// Create the tables and indexes the stores expect, if missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reclamations (
            id           UUID PRIMARY KEY,
            email        TEXT NOT NULL,
            message      TEXT NOT NULL,
            date_created TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| map_sqlx_error("create_reclamations_table", e))?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS reclamations_date_created_idx
            ON reclamations (date_created DESC)
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| map_sqlx_error("create_reclamations_index", e))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id    UUID PRIMARY KEY,
            name  TEXT NOT NULL,
            price NUMERIC NOT NULL,
            stock BIGINT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| map_sqlx_error("create_products_table", e))?;

    Ok(())
}

/// Postgres reclamation store.
#[derive(Debug, Clone)]
pub struct PostgresReclamationStore {
    pool: Arc<PgPool>,
}

impl PostgresReclamationStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

#[async_trait]
impl ReclamationStore for PostgresReclamationStore {
    #[instrument(skip(self, entry), fields(email = %entry.email), err)]
    async fn create(&self, entry: NewReclamation) -> Result<Reclamation, StoreError> {
        let id = ReclamationId::new();
        let row = sqlx::query(
            r#"
            INSERT INTO reclamations (id, email, message)
            VALUES ($1, $2, $3)
            RETURNING id, email, message, date_created
            "#,
        )
        .bind(id.as_uuid())
        .bind(entry.email.as_str())
        .bind(&entry.message)
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("create_reclamation", e))?;

        let parsed = ReclamationRow::from_row(&row)
            .map_err(|e| StoreError::Backend(format!("failed to read reclamation row: {e}")))?;
        Ok(parsed.into())
    }

    #[instrument(skip(self), err)]
    async fn list_recent(&self) -> Result<Vec<Reclamation>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, email, message, date_created
            FROM reclamations
            ORDER BY date_created DESC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_reclamations", e))?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let parsed = ReclamationRow::from_row(&row)
                .map_err(|e| StoreError::Backend(format!("failed to read reclamation row: {e}")))?;
            out.push(parsed.into());
        }
        Ok(out)
    }
}

/// Postgres product store.
#[derive(Debug, Clone)]
pub struct PostgresProductStore {
    pool: Arc<PgPool>,
}

impl PostgresProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    #[instrument(skip(self, entry), fields(name = %entry.name), err)]
    async fn create(&self, entry: NewProduct) -> Result<Product, StoreError> {
        let id = ProductId::new();
        let row = sqlx::query(
            r#"
            INSERT INTO products (id, name, price, stock)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, price, stock
            "#,
        )
        .bind(id.as_uuid())
        .bind(&entry.name)
        .bind(entry.price)
        .bind(entry.stock)
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("create_product", e))?;

        let parsed = ProductRow::from_row(&row)
            .map_err(|e| StoreError::Backend(format!("failed to read product row: {e}")))?;
        Ok(parsed.into())
    }

    #[instrument(skip(self), err)]
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, price, stock
            FROM products
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_products", e))?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let parsed = ProductRow::from_row(&row)
                .map_err(|e| StoreError::Backend(format!("failed to read product row: {e}")))?;
            out.push(parsed.into());
        }
        Ok(out)
    }
}

/// Map SQLx errors to StoreError.
fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => StoreError::Backend(format!(
            "database error in {}: {}",
            operation,
            db_err.message()
        )),
        sqlx::Error::PoolClosed => {
            StoreError::Unavailable(format!("connection pool closed in {operation}"))
        }
        sqlx::Error::PoolTimedOut => {
            StoreError::Unavailable(format!("connection pool timed out in {operation}"))
        }
        _ => StoreError::Backend(format!("sqlx error in {operation}: {err}")),
    }
}

// SQLx row types

#[derive(Debug)]
struct ReclamationRow {
    id: uuid::Uuid,
    email: String,
    message: String,
    date_created: DateTime<Utc>,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for ReclamationRow {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        Ok(ReclamationRow {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            message: row.try_get("message")?,
            date_created: row.try_get("date_created")?,
        })
    }
}

impl From<ReclamationRow> for Reclamation {
    fn from(row: ReclamationRow) -> Self {
        Reclamation {
            id: ReclamationId::from_uuid(row.id),
            email: row.email,
            message: row.message,
            date_created: row.date_created,
        }
    }
}

#[derive(Debug)]
struct ProductRow {
    id: uuid::Uuid,
    name: String,
    price: Decimal,
    stock: i64,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for ProductRow {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        Ok(ProductRow {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            stock: row.try_get("stock")?,
        })
    }
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId::from_uuid(row.id),
            name: row.name,
            price: row.price,
            stock: row.stock,
        }
    }
}
