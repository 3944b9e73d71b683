//! Axum route definitions for the catalog API.

use crate::api::handlers;
use crate::service::CatalogService;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// Create all catalog routes.
///
/// # Routes
///
/// - `GET /instruments` - List all instruments
/// - `POST /instruments` - Create an instrument
/// - `GET /instruments/{id}` - Get by id
/// - `PUT /instruments/{id}` - Replace by id
/// - `DELETE /instruments/{id}` - Delete by id
pub fn catalog_routes(service: Arc<CatalogService>) -> Router {
    Router::new()
        .route(
            "/instruments",
            get(handlers::list_instruments).post(handlers::create_instrument),
        )
        .route(
            "/instruments/{id}",
            get(handlers::get_instrument)
                .put(handlers::update_instrument)
                .delete(handlers::delete_instrument),
        )
        .with_state(service)
}
