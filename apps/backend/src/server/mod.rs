//! TCP front end: accept loop, per-connection sessions, per-table tasks.

pub mod registry;
pub mod session;
pub mod table_task;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

pub use registry::TableRegistry;
pub use table_task::TableHandle;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Accept connections until the listener fails.
pub async fn serve(listener: TcpListener, config: ServerConfig) -> Result<(), AppError> {
    let registry = TableRegistry::new(config);
    serve_with(listener, registry).await
}

pub async fn serve_with(
    listener: TcpListener,
    registry: Arc<TableRegistry>,
) -> Result<(), AppError> {
    loop {
        let (stream, peer) = listener.accept().await?;
        let registry = Arc::clone(&registry);
        tokio::spawn(async move {
            if let Err(err) = session::handle_connection(stream, peer, registry).await {
                warn!(%peer, error = %err, "session ended with error");
            }
        });
        info!(%peer, "client connected");
    }
}
