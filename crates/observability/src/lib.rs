//! Observability infrastructure for the catalog service.
//!
//! Structured logging via tracing; the log level is controlled with the
//! `RUST_LOG` environment variable.

pub mod logging;

pub use logging::{init_logging, LogFormat};
