//! PostgreSQL implementation of the `InstrumentStore` trait.

use crate::db::models::InstrumentRow;
use crate::error::{CatalogError, CatalogResult};
use crate::store::InstrumentStore;
use crate::types::{Instrument, InstrumentId, NewInstrument};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{debug, info, instrument};

const SELECT_COLUMNS: &str = r#"id, name, "type", price, description"#;

/// PostgreSQL-backed instrument store.
///
/// One table, `instruments`, with a `BIGSERIAL` key; the database owns id
/// assignment and serializes concurrent writes.
#[derive(Debug, Clone)]
pub struct PostgresInstrumentStore {
    pool: PgPool,
}

impl PostgresInstrumentStore {
    /// Create a new store with a connection pool.
    pub async fn new(database_url: &str, max_connections: u32) -> CatalogResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| {
                CatalogError::Storage(format!("Failed to connect to database: {}", e))
            })?;

        info!(max_connections, "Connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Create from an existing connection pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run the migration SQL to create the instruments table.
    pub async fn run_migrations(&self) -> CatalogResult<()> {
        let migration_sql = include_str!("../../../../migrations/001_create_instruments.sql");
        sqlx::raw_sql(migration_sql)
            .execute(&self.pool)
            .await
            .map_err(|e| CatalogError::Storage(format!("Migration failed: {}", e)))?;
        info!("Database migrations completed successfully");
        Ok(())
    }
}

#[async_trait]
impl InstrumentStore for PostgresInstrumentStore {
    #[instrument(skip(self))]
    async fn list(&self) -> CatalogResult<Vec<Instrument>> {
        let query = format!("SELECT {} FROM instruments ORDER BY id", SELECT_COLUMNS);
        let rows = sqlx::query_as::<_, InstrumentRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CatalogError::Storage(format!("Failed to list instruments: {}", e)))?;

        Ok(rows.iter().map(|r| r.to_domain()).collect())
    }

    #[instrument(skip(self))]
    async fn get(&self, id: InstrumentId) -> CatalogResult<Option<Instrument>> {
        let query = format!("SELECT {} FROM instruments WHERE id = $1", SELECT_COLUMNS);
        let row = sqlx::query_as::<_, InstrumentRow>(&query)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CatalogError::Storage(format!("Failed to get instrument: {}", e)))?;

        Ok(row.map(|r| r.to_domain()))
    }

    #[instrument(skip(self, fields))]
    async fn insert(&self, fields: NewInstrument) -> CatalogResult<Instrument> {
        let query = format!(
            r#"INSERT INTO instruments (name, "type", price, description)
               VALUES ($1, $2, $3, $4)
               RETURNING {}"#,
            SELECT_COLUMNS
        );

        let row = sqlx::query_as::<_, InstrumentRow>(&query)
            .bind(&fields.name)
            .bind(&fields.kind)
            .bind(fields.price)
            .bind(&fields.description)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CatalogError::Storage(format!("Failed to insert instrument: {}", e)))?;

        debug!(id = row.id, "Inserted instrument");
        Ok(row.to_domain())
    }

    #[instrument(skip(self, fields))]
    async fn replace(&self, id: InstrumentId, fields: NewInstrument) -> CatalogResult<Instrument> {
        let query = format!(
            r#"UPDATE instruments
               SET name = $2, "type" = $3, price = $4, description = $5
               WHERE id = $1
               RETURNING {}"#,
            SELECT_COLUMNS
        );

        let row = sqlx::query_as::<_, InstrumentRow>(&query)
            .bind(id.value())
            .bind(&fields.name)
            .bind(&fields.kind)
            .bind(fields.price)
            .bind(&fields.description)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CatalogError::Storage(format!("Failed to update instrument: {}", e)))?;

        row.map(|r| r.to_domain()).ok_or(CatalogError::NotFound(id))
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: InstrumentId) -> CatalogResult<Instrument> {
        let query = format!(
            "DELETE FROM instruments WHERE id = $1 RETURNING {}",
            SELECT_COLUMNS
        );

        let row = sqlx::query_as::<_, InstrumentRow>(&query)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CatalogError::Storage(format!("Failed to delete instrument: {}", e)))?;

        row.map(|r| r.to_domain()).ok_or(CatalogError::NotFound(id))
    }
}
