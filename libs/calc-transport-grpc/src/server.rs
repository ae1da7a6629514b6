//! TCP hosting for a set of tonic routes.

use anyhow::Context;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::transport::Server;

/// Bind a TCP listener for the gRPC server.
///
/// `addr` is any `host:port` accepted by the resolver; port `0` picks an
/// ephemeral port.
///
/// # Errors
/// Returns an error if the address cannot be resolved or bound.
pub async fn bind_tcp(addr: &str) -> anyhow::Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind gRPC listener on {addr}"))
}

/// Serve `routes` on an already bound listener until `cancel` fires.
///
/// In-flight calls are allowed to finish after cancellation.
///
/// # Errors
/// Returns an error if the listener address is unavailable or the server
/// fails while running.
pub async fn serve_tcp(
    listener: TcpListener,
    routes: tonic::service::Routes,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let bound_addr = listener.local_addr()?;
    tracing::info!(%bound_addr, transport = "tcp", "gRPC server listening");

    let incoming = TcpListenerStream::new(listener);
    Server::builder()
        .add_routes(routes)
        .serve_with_incoming_shutdown(incoming, async move {
            cancel.cancelled().await;
        })
        .await
        .context("gRPC server terminated with an error")?;

    tracing::info!(%bound_addr, "gRPC server stopped");
    Ok(())
}
