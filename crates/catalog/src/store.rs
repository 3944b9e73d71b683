//! Instrument storage trait and in-memory implementation.
//!
//! This module defines the `InstrumentStore` trait that abstracts away
//! storage details. The Postgres adapter lives in `crate::db`.

use crate::error::{CatalogError, CatalogResult};
use crate::types::{Instrument, InstrumentId, NewInstrument};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Trait for instrument storage.
///
/// Implementations own id assignment: `insert` allocates a new unique id
/// and returns the full record. `get` signals absence with `None`, while
/// `replace` and `remove` signal it with [`CatalogError::NotFound`].
#[async_trait]
pub trait InstrumentStore: Send + Sync {
    /// List all instruments in storage order.
    async fn list(&self) -> CatalogResult<Vec<Instrument>>;

    /// Get an instrument by id.
    async fn get(&self, id: InstrumentId) -> CatalogResult<Option<Instrument>>;

    /// Persist a new instrument, assigning its id.
    async fn insert(&self, fields: NewInstrument) -> CatalogResult<Instrument>;

    /// Overwrite all non-id fields of an existing instrument.
    async fn replace(&self, id: InstrumentId, fields: NewInstrument) -> CatalogResult<Instrument>;

    /// Delete an instrument, returning the deleted record.
    async fn remove(&self, id: InstrumentId) -> CatalogResult<Instrument>;
}

/// In-memory implementation of [`InstrumentStore`].
///
/// Useful for testing and development. Ids count up from 1 so a fresh
/// store matches the sequence a fresh database table would produce.
#[derive(Debug)]
pub struct InMemoryInstrumentStore {
    instruments: Arc<RwLock<HashMap<InstrumentId, Instrument>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryInstrumentStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            instruments: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Get the number of instruments in the store.
    pub fn len(&self) -> usize {
        self.instruments.read().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.instruments.read().is_empty()
    }
}

impl Default for InMemoryInstrumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryInstrumentStore {
    fn clone(&self) -> Self {
        Self {
            instruments: Arc::clone(&self.instruments),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

#[async_trait]
impl InstrumentStore for InMemoryInstrumentStore {
    async fn list(&self) -> CatalogResult<Vec<Instrument>> {
        let instruments = self.instruments.read();
        let mut results: Vec<Instrument> = instruments.values().cloned().collect();
        results.sort_by_key(|i| i.id);
        Ok(results)
    }

    async fn get(&self, id: InstrumentId) -> CatalogResult<Option<Instrument>> {
        Ok(self.instruments.read().get(&id).cloned())
    }

    async fn insert(&self, fields: NewInstrument) -> CatalogResult<Instrument> {
        let id = InstrumentId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let instrument = Instrument::from_fields(id, fields);
        self.instruments.write().insert(id, instrument.clone());
        Ok(instrument)
    }

    async fn replace(&self, id: InstrumentId, fields: NewInstrument) -> CatalogResult<Instrument> {
        let mut instruments = self.instruments.write();
        if !instruments.contains_key(&id) {
            return Err(CatalogError::NotFound(id));
        }

        let instrument = Instrument::from_fields(id, fields);
        instruments.insert(id, instrument.clone());
        Ok(instrument)
    }

    async fn remove(&self, id: InstrumentId) -> CatalogResult<Instrument> {
        self.instruments
            .write()
            .remove(&id)
            .ok_or(CatalogError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guitar() -> NewInstrument {
        NewInstrument::new("Guitar", "String", 199.99, "6-string")
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = InMemoryInstrumentStore::new();

        let first = store.insert(guitar()).await.unwrap();
        let second = store
            .insert(NewInstrument::new("Drum", "Percussion", 89.5, "Snare"))
            .await
            .unwrap();

        assert_eq!(first.id, InstrumentId::new(1));
        assert_eq!(second.id, InstrumentId::new(2));
    }

    #[tokio::test]
    async fn test_insert_then_get_roundtrip() {
        let store = InMemoryInstrumentStore::new();

        let created = store.insert(guitar()).await.unwrap();
        let retrieved = store.get(created.id).await.unwrap();

        assert_eq!(retrieved, Some(created));
    }

    #[tokio::test]
    async fn test_replace_preserves_id() {
        let store = InMemoryInstrumentStore::new();
        let created = store.insert(guitar()).await.unwrap();

        let updated = store
            .replace(
                created.id,
                NewInstrument::new("Guitar", "String", 149.99, "6-string"),
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.price, 149.99);

        let retrieved = store.get(created.id).await.unwrap().unwrap();
        assert_eq!(retrieved, updated);
    }

    #[tokio::test]
    async fn test_remove_returns_deleted_record() {
        let store = InMemoryInstrumentStore::new();
        let created = store.insert(guitar()).await.unwrap();

        let removed = store.remove(created.id).await.unwrap();
        assert_eq!(removed, created);
        assert!(store.get(created.id).await.unwrap().is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_missing_ids_signal_not_found() {
        let store = InMemoryInstrumentStore::new();
        let missing = InstrumentId::new(999);

        assert!(store.get(missing).await.unwrap().is_none());
        assert!(matches!(
            store.replace(missing, guitar()).await,
            Err(CatalogError::NotFound(_))
        ));
        assert!(matches!(
            store.remove(missing).await,
            Err(CatalogError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_contains_exactly_inserted_records() {
        let store = InMemoryInstrumentStore::new();

        let mut inserted = vec![
            store.insert(guitar()).await.unwrap(),
            store
                .insert(NewInstrument::new("Drum", "Percussion", 89.5, "Snare"))
                .await
                .unwrap(),
            store
                .insert(NewInstrument::new("Flute", "Wind", 120.0, "Concert flute"))
                .await
                .unwrap(),
        ];

        let mut listed = store.list().await.unwrap();
        inserted.sort_by_key(|i| i.id);
        listed.sort_by_key(|i| i.id);
        assert_eq!(listed, inserted);
    }
}
