use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Wait until the process receives Ctrl+C or SIGTERM.
///
/// # Errors
/// Returns an error if a signal handler cannot be installed.
pub async fn wait_for_shutdown() -> anyhow::Result<()> {
    let source = tokio::select! {
        result = signal::ctrl_c() => {
            result.inspect_err(|e| tracing::error!(%e, "Error handling Ctrl+C signal"))?;
            "ctrl_c"
        }
        result = sigterm() => {
            result?;
            "sigterm"
        }
    };

    tracing::info!(signal = source, "Shutdown signal received, initiating graceful shutdown");
    Ok(())
}

/// Cancel `token` once a termination signal arrives.
///
/// A failure to install the handlers is logged and cancels the token as well.
pub fn cancel_on_shutdown_signal(token: CancellationToken) {
    tokio::spawn(async move {
        if let Err(e) = wait_for_shutdown().await {
            tracing::error!(error = %e, "Signal handling failed");
        }
        token.cancel();
    });
}

#[cfg(unix)]
async fn sigterm() -> anyhow::Result<()> {
    let mut handler = signal::unix::signal(signal::unix::SignalKind::terminate())
        .inspect_err(|e| tracing::error!(%e, "Failed to install SIGTERM handler"))?;
    handler.recv().await;
    Ok(())
}

#[cfg(not(unix))]
async fn sigterm() -> anyhow::Result<()> {
    std::future::pending::<anyhow::Result<()>>().await
}
