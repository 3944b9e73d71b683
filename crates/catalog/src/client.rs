//! HTTP client for the catalog API.
//!
//! This is the remote (mobile-side) contract: one method per operation,
//! JSON in and out. Every failure is logged with its underlying cause and
//! surfaced as a single generic, operation-specific error.

use crate::types::{Instrument, NewInstrument};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use thiserror::Error;
use tracing::error;

/// Operation-specific client errors.
///
/// The display text is the message callers surface; the original cause is
/// logged before it is discarded.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("could not fetch instruments")]
    List,

    #[error("could not fetch instrument")]
    Get,

    #[error("could not create instrument")]
    Create,

    #[error("could not update instrument")]
    Update,

    #[error("could not delete instrument")]
    Delete,
}

/// HTTP client for a catalog service instance.
#[derive(Clone)]
pub struct CatalogHttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl CatalogHttpClient {
    /// Create a new client against the given base URL.
    pub fn new(base_url: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Fetch all instruments.
    pub async fn list_instruments(&self) -> Result<Vec<Instrument>, ClientError> {
        let url = format!("{}/instruments", self.base_url);
        let response = self.client.get(&url).send().await.map_err(|e| {
            error!(cause = %e, "Listing instruments failed");
            ClientError::List
        })?;

        if !response.status().is_success() {
            error!(status = %response.status(), "Listing instruments failed");
            return Err(ClientError::List);
        }

        response.json().await.map_err(|e| {
            error!(cause = %e, "Decoding instrument list failed");
            ClientError::List
        })
    }

    /// Fetch a single instrument by id.
    pub async fn get_instrument(&self, id: i64) -> Result<Instrument, ClientError> {
        let url = format!("{}/instruments/{}", self.base_url, id);
        let response = self.client.get(&url).send().await.map_err(|e| {
            error!(cause = %e, id, "Fetching instrument failed");
            ClientError::Get
        })?;

        if !response.status().is_success() {
            error!(status = %response.status(), id, "Fetching instrument failed");
            return Err(ClientError::Get);
        }

        response.json().await.map_err(|e| {
            error!(cause = %e, id, "Decoding instrument failed");
            ClientError::Get
        })
    }

    /// Create a new instrument.
    pub async fn create_instrument(
        &self,
        fields: &NewInstrument,
    ) -> Result<Instrument, ClientError> {
        let url = format!("{}/instruments", self.base_url);
        let response = self.client.post(&url).json(fields).send().await.map_err(|e| {
            error!(cause = %e, "Creating instrument failed");
            ClientError::Create
        })?;

        if !response.status().is_success() {
            error!(status = %response.status(), "Creating instrument failed");
            return Err(ClientError::Create);
        }

        response.json().await.map_err(|e| {
            error!(cause = %e, "Decoding created instrument failed");
            ClientError::Create
        })
    }

    /// Replace all non-id fields of an instrument.
    pub async fn update_instrument(
        &self,
        id: i64,
        fields: &NewInstrument,
    ) -> Result<Instrument, ClientError> {
        let url = format!("{}/instruments/{}", self.base_url, id);
        let response = self.client.put(&url).json(fields).send().await.map_err(|e| {
            error!(cause = %e, id, "Updating instrument failed");
            ClientError::Update
        })?;

        if !response.status().is_success() {
            error!(status = %response.status(), id, "Updating instrument failed");
            return Err(ClientError::Update);
        }

        response.json().await.map_err(|e| {
            error!(cause = %e, id, "Decoding updated instrument failed");
            ClientError::Update
        })
    }

    /// Delete an instrument, returning the deleted record.
    pub async fn delete_instrument(&self, id: i64) -> Result<Instrument, ClientError> {
        let url = format!("{}/instruments/{}", self.base_url, id);
        let response = self.client.delete(&url).send().await.map_err(|e| {
            error!(cause = %e, id, "Deleting instrument failed");
            ClientError::Delete
        })?;

        if !response.status().is_success() {
            error!(status = %response.status(), id, "Deleting instrument failed");
            return Err(ClientError::Delete);
        }

        response.json().await.map_err(|e| {
            error!(cause = %e, id, "Decoding deleted instrument failed");
            ClientError::Delete
        })
    }
}

#[cfg(all(test, feature = "api"))]
mod tests {
    use super::*;
    use crate::api::routes::catalog_routes;
    use crate::service::CatalogService;
    use crate::store::InMemoryInstrumentStore;
    use crate::types::InstrumentId;
    use std::sync::Arc;

    async fn spawn_server() -> String {
        let store = Arc::new(InMemoryInstrumentStore::new());
        let app = catalog_routes(Arc::new(CatalogService::new(store)));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_client_crud_roundtrip() {
        let base_url = spawn_server().await;
        let client = CatalogHttpClient::new(&base_url);

        let created = client
            .create_instrument(&NewInstrument::new("Guitar", "String", 199.99, "6-string"))
            .await
            .unwrap();
        assert_eq!(created.id, InstrumentId::new(1));

        let fetched = client.get_instrument(1).await.unwrap();
        assert_eq!(fetched, created);

        let updated = client
            .update_instrument(1, &NewInstrument::new("Guitar", "String", 149.99, "6-string"))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.price, 149.99);

        let listed = client.list_instruments().await.unwrap();
        assert_eq!(listed, vec![updated.clone()]);

        let deleted = client.delete_instrument(1).await.unwrap();
        assert_eq!(deleted, updated);
        assert!(client.list_instruments().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_client_wraps_failures_in_generic_errors() {
        let base_url = spawn_server().await;
        let client = CatalogHttpClient::new(&base_url);

        let err = client.get_instrument(999).await.unwrap_err();
        assert_eq!(err.to_string(), "could not fetch instrument");

        let err = client.delete_instrument(999).await.unwrap_err();
        assert_eq!(err.to_string(), "could not delete instrument");
    }
}
