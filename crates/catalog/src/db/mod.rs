//! Database adapters for the catalog.

pub mod models;
pub mod postgres;

pub use postgres::PostgresInstrumentStore;
