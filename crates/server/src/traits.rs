//! Server traits for lifecycle management.

use async_trait::async_trait;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;

use crate::error::Result;

/// Core server trait.
///
/// Provides a consistent interface for starting, running, and monitoring
/// a server with cooperative shutdown.
#[async_trait]
pub trait Server: Send + Sync + 'static {
    /// Returns the server's name for logging and identification.
    fn name(&self) -> &str;

    /// Returns the address the server is bound to, if running.
    fn address(&self) -> Option<SocketAddr>;

    /// Returns true if the server is currently running.
    fn is_running(&self) -> bool;

    /// Runs the server until the shutdown token is cancelled.
    ///
    /// Implementations bind, accept connections until `shutdown` is
    /// cancelled, drain in-flight requests, and return `Ok(())` on a
    /// clean shutdown.
    async fn run(&self, shutdown: CancellationToken) -> Result<()>;
}

/// Extension trait providing convenience methods for servers.
///
/// Automatically implemented for all [`Server`] types.
pub trait ServerExt: Server + Sized {
    /// Spawns the server on a new task and returns a handle and shutdown token.
    fn spawn(self) -> (tokio::task::JoinHandle<Result<()>>, CancellationToken) {
        let token = CancellationToken::new();
        let token_clone = token.clone();
        let handle = tokio::spawn(async move { self.run(token_clone).await });
        (handle, token)
    }

    /// Runs the server with automatic Ctrl+C handling.
    fn run_with_ctrl_c(self) -> impl std::future::Future<Output = Result<()>> + Send {
        async move {
            let shutdown = crate::shutdown::ShutdownController::with_ctrl_c();
            self.run(shutdown.token()).await
        }
    }
}

// Blanket implementation for all Server types
impl<T: Server + Sized> ServerExt for T {}
