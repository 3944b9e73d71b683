//! Health check endpoint.

use axum::{response::Json, routing::get, Router};
use chrono::Utc;
use serde_json::{json, Value};

/// Health check handler.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Create the health check router.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_handler() {
        let Json(body) = health_handler().await;
        assert_eq!(body["status"], "ok");
        assert!(body["timestamp"].is_string());
    }
}
