//! OS signal handling.

use tokio::sync::broadcast;

/// Resolve on Ctrl+C or when the internal shutdown channel fires.
pub async fn shutdown_signal(mut internal: broadcast::Receiver<()>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            // Only the internal channel can stop us now
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => {}
        _ = internal.recv() => {}
    }
    tracing::info!("Shutdown signal received");
}
