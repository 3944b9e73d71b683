//! Catalog service - the orchestration layer between transport and storage.

use crate::error::{CatalogError, CatalogResult};
use crate::store::InstrumentStore;
use crate::types::{Instrument, InstrumentId, NewInstrument};
use std::sync::Arc;
use tracing::debug;

/// Thin service adapting raw transport inputs to typed store operations.
///
/// The only logic this layer owns is identifier coercion: path identifiers
/// arrive as text and become [`InstrumentId`]s or
/// [`CatalogError::InvalidId`]. Everything else delegates directly to the
/// injected store; store failures propagate unchanged.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn InstrumentStore>,
}

impl CatalogService {
    /// Create a new catalog service over the given store.
    pub fn new(store: Arc<dyn InstrumentStore>) -> Self {
        Self { store }
    }

    /// Coerce a path-provided identifier into a typed id.
    pub fn parse_id(raw: &str) -> CatalogResult<InstrumentId> {
        raw.parse::<i64>()
            .map(InstrumentId::new)
            .map_err(|_| CatalogError::InvalidId(raw.to_string()))
    }

    /// List all instruments.
    pub async fn list(&self) -> CatalogResult<Vec<Instrument>> {
        self.store.list().await
    }

    /// Get an instrument by its raw path identifier.
    pub async fn get(&self, raw_id: &str) -> CatalogResult<Option<Instrument>> {
        let id = Self::parse_id(raw_id)?;
        self.store.get(id).await
    }

    /// Create a new instrument from caller-supplied fields.
    pub async fn create(&self, fields: NewInstrument) -> CatalogResult<Instrument> {
        let created = self.store.insert(fields).await?;
        debug!(id = %created.id, name = %created.name, "Created instrument");
        Ok(created)
    }

    /// Replace all non-id fields of an existing instrument.
    pub async fn replace(&self, raw_id: &str, fields: NewInstrument) -> CatalogResult<Instrument> {
        let id = Self::parse_id(raw_id)?;
        self.store.replace(id, fields).await
    }

    /// Delete an instrument, returning the deleted record.
    pub async fn remove(&self, raw_id: &str) -> CatalogResult<Instrument> {
        let id = Self::parse_id(raw_id)?;
        let removed = self.store.remove(id).await?;
        debug!(id = %removed.id, "Deleted instrument");
        Ok(removed)
    }

    /// Get the underlying store.
    pub fn store(&self) -> &Arc<dyn InstrumentStore> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryInstrumentStore;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(InMemoryInstrumentStore::new()))
    }

    #[test]
    fn test_parse_id_accepts_integers() {
        assert_eq!(
            CatalogService::parse_id("7").unwrap(),
            InstrumentId::new(7)
        );
        assert_eq!(
            CatalogService::parse_id("-3").unwrap(),
            InstrumentId::new(-3)
        );
    }

    #[test]
    fn test_parse_id_rejects_malformed_input() {
        for raw in ["abc", "1.5", "", "1x", " 1"] {
            assert!(matches!(
                CatalogService::parse_id(raw),
                Err(CatalogError::InvalidId(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_create_then_get_delegates_to_store() {
        let service = service();

        let created = service
            .create(NewInstrument::new("Guitar", "String", 199.99, "6-string"))
            .await
            .unwrap();

        let retrieved = service.get(&created.id.to_string()).await.unwrap();
        assert_eq!(retrieved, Some(created));
    }

    #[tokio::test]
    async fn test_get_with_malformed_id_never_reaches_store() {
        let service = service();

        let result = service.get("abc").await;
        assert!(matches!(result, Err(CatalogError::InvalidId(_))));
    }

    #[tokio::test]
    async fn test_replace_and_remove_propagate_not_found() {
        let service = service();
        let fields = NewInstrument::new("Guitar", "String", 199.99, "6-string");

        assert!(matches!(
            service.replace("999", fields.clone()).await,
            Err(CatalogError::NotFound(_))
        ));
        assert!(matches!(
            service.remove("999").await,
            Err(CatalogError::NotFound(_))
        ));
    }
}
