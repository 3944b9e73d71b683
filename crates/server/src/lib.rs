//! HTTP server infrastructure for the instrument catalog.
//!
//! Provides the [`Server`] trait for consistent lifecycle management, an
//! axum-based [`HttpServer`] implementation, graceful shutdown via
//! [`ShutdownController`], and the health endpoint.

pub mod config;
pub mod error;
pub mod health;
pub mod http;
pub mod shutdown;
pub mod traits;

pub use config::{ServerConfig, DEFAULT_HTTP_PORT};
pub use error::{Result, ServerError};
pub use health::{health_handler, health_routes};
pub use http::HttpServer;
pub use shutdown::{shutdown_signal, ShutdownController};
pub use traits::{Server, ServerExt};
