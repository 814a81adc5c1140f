//! Server lifecycle: bind, serve in the background, stop on demand.
//!
//! The original tool spawned its listener fire-and-forget with no way to
//! stop it. Here the listener runs on a background task driven by a
//! cancellation token, so the binary can shut down cleanly on Ctrl-C and
//! tests can start and tear down the service deterministically.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::config::Config;
use crate::http::{router, AppState};

/// Handle to a running server.
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown: CancellationToken,
    task: JoinHandle<()>,
}

impl ServerHandle {
    /// The address the listener is actually bound to.
    ///
    /// Differs from the configured address when port 0 was requested.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop the server gracefully and wait for the serve task to finish.
    pub async fn stop(self) {
        self.shutdown.cancel();
        if let Err(e) = self.task.await {
            error!("serve task panicked during shutdown: {}", e);
        }
    }
}

/// Bind the listener and start serving in the background.
///
/// Returns once the socket is bound; requests are handled on a spawned
/// task until [`ServerHandle::stop`] is called.
pub async fn serve(config: &Config) -> Result<ServerHandle> {
    let state = Arc::new(AppState {
        browse_root: config.browse.root.clone(),
        device_name: config.server.device_name.clone(),
    });
    let app = router(state);

    let listener = TcpListener::bind((config.server.bind, config.server.port))
        .await
        .with_context(|| {
            format!(
                "Failed to bind listener on {}:{}",
                config.server.bind, config.server.port
            )
        })?;
    let addr = listener.local_addr().context("Failed to read bound address")?;

    let shutdown = CancellationToken::new();
    let token = shutdown.clone();
    let task = tokio::spawn(async move {
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(token.cancelled_owned())
            .await;
        if let Err(e) = result {
            error!("HTTP server exited with error: {}", e);
        }
    });

    info!("HTTP listener bound on {}", addr);

    Ok(ServerHandle {
        addr,
        shutdown,
        task,
    })
}
