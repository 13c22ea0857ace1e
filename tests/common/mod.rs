//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use opennic_omnibox::lifecycle::{build_interceptor, Shutdown};
use opennic_omnibox::{HttpServer, OmniboxConfig};
use tokio::net::TcpListener;

/// Start the service on an ephemeral port.
///
/// Keep the returned `Shutdown` alive for as long as the server should run.
pub async fn start_server(config: OmniboxConfig) -> (SocketAddr, Shutdown) {
    let interceptor = Arc::new(build_interceptor(&config).unwrap());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, interceptor);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown)
}
