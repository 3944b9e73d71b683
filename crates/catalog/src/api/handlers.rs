//! HTTP request handlers for the catalog API.

use crate::api::models::{ErrorResponse, InstrumentPayload};
use crate::error::CatalogError;
use crate::service::CatalogService;
use crate::types::Instrument;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use tracing::error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Translate a catalog error into a transport status and body.
///
/// This is the only place internal failures become status codes. Storage
/// causes are logged but never leaked to the client.
fn error_response(err: CatalogError) -> ApiError {
    match err {
        CatalogError::InvalidId(raw) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("invalid instrument id: {}", raw),
            }),
        ),
        CatalogError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("instrument not found: {}", id),
            }),
        ),
        CatalogError::Storage(cause) => {
            error!(%cause, "Storage operation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "storage operation failed".to_string(),
                }),
            )
        }
    }
}

/// GET /instruments
pub async fn list_instruments(
    State(service): State<Arc<CatalogService>>,
) -> Result<Json<Vec<Instrument>>, ApiError> {
    let instruments = service.list().await.map_err(error_response)?;
    Ok(Json(instruments))
}

/// GET /instruments/{id}
pub async fn get_instrument(
    State(service): State<Arc<CatalogService>>,
    Path(id): Path<String>,
) -> Result<Json<Instrument>, ApiError> {
    match service.get(&id).await.map_err(error_response)? {
        Some(instrument) => Ok(Json(instrument)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("instrument not found: {}", id),
            }),
        )),
    }
}

/// POST /instruments
pub async fn create_instrument(
    State(service): State<Arc<CatalogService>>,
    Json(payload): Json<InstrumentPayload>,
) -> Result<(StatusCode, Json<Instrument>), ApiError> {
    let created = service
        .create(payload.into())
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /instruments/{id}
pub async fn update_instrument(
    State(service): State<Arc<CatalogService>>,
    Path(id): Path<String>,
    Json(payload): Json<InstrumentPayload>,
) -> Result<Json<Instrument>, ApiError> {
    let updated = service
        .replace(&id, payload.into())
        .await
        .map_err(error_response)?;
    Ok(Json(updated))
}

/// DELETE /instruments/{id}
pub async fn delete_instrument(
    State(service): State<Arc<CatalogService>>,
    Path(id): Path<String>,
) -> Result<Json<Instrument>, ApiError> {
    let deleted = service.remove(&id).await.map_err(error_response)?;
    Ok(Json(deleted))
}
