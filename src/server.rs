use std::{future::Future, future::IntoFuture, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::watch};

/// Serve `router` on `listener` until `signal` resolves, then drain.
///
/// Once the signal fires no new connections are accepted. In-flight requests
/// get `drain_timeout` to finish; after that this returns anyway and whatever
/// is still running is abandoned.
pub async fn serve<F>(
    listener: TcpListener,
    router: Router,
    drain_timeout: Duration,
    signal: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let server = axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            signal.await;
            tracing::info!("Shutdown signal received, draining in-flight requests...");
            let _ = shutdown_tx.send(true);
        })
        .into_future();
    tokio::pin!(server);

    let deadline = async move {
        if shutdown_rx.wait_for(|stopping| *stopping).await.is_err() {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(drain_timeout).await;
    };

    tokio::select! {
        res = &mut server => {
            res?;
            tracing::info!("All connections closed");
        }
        () = deadline => {
            tracing::warn!(
                "Requests still in flight after {}s, forcing shutdown",
                drain_timeout.as_secs_f64()
            );
        }
    }

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
