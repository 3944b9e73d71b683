//! # Catalog Crate
//!
//! This crate provides the core resource layer for the instrument catalog
//! service: the `Instrument` domain types, the `InstrumentStore` storage
//! trait with in-memory and Postgres adapters, the `CatalogService`
//! orchestration layer, and the REST route surface.
//!
//! ## Architecture
//!
//! Following the trait-based architecture, this crate defines the
//! `InstrumentStore` TRAIT that adapters implement. The service layer never
//! cares which backend it talks to.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    Route Layer (api)                 │
//! │   parse path/body → CatalogService → status + JSON   │
//! └──────────────────────────┬───────────────────────────┘
//!                            ▼
//! ┌──────────────────────────────────────────────────────┐
//! │                   CatalogService                     │
//! │   identifier coercion, pass-through delegation       │
//! └──────────────────────────┬───────────────────────────┘
//!                            ▼
//! ┌──────────────────────────────────────────────────────┐
//! │              InstrumentStore (trait)                 │
//! │  InMemoryInstrumentStore │ PostgresInstrumentStore   │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod service;
pub mod store;
pub mod types;

#[cfg(feature = "postgres")]
pub mod db;

#[cfg(feature = "api")]
pub mod api;

#[cfg(feature = "client")]
pub mod client;

// Re-export main types for convenience
pub use error::{CatalogError, CatalogResult};
pub use service::CatalogService;
pub use store::{InMemoryInstrumentStore, InstrumentStore};
pub use types::{Instrument, InstrumentId, NewInstrument};

#[cfg(feature = "postgres")]
pub use db::PostgresInstrumentStore;

#[cfg(feature = "api")]
pub use api::routes::catalog_routes;

#[cfg(feature = "client")]
pub use client::{CatalogHttpClient, ClientError};
