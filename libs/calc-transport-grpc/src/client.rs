//! gRPC client transport configuration and connection utilities.
//!
//! Channels are plaintext HTTP/2 with keepalive. Per-call deadlines are not
//! configured here; callers attach them to each request.
//!
//! **Note:** nothing in this module retries. A failed connect is reported to
//! the caller as is.

use std::time::Duration;
use tonic::transport::{Channel, Endpoint};
use tracing::Instrument;

const TCP_KEEPALIVE: Duration = Duration::from_secs(30);
const HTTP2_KEEPALIVE_INTERVAL: Duration = Duration::from_secs(30);
const HTTP2_KEEPALIVE_TIMEOUT: Duration = Duration::from_secs(10);

fn duration_to_u64_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Configuration for the gRPC client transport stack.
#[derive(Debug, Clone)]
pub struct GrpcClientConfig {
    /// Timeout for establishing the connection.
    pub connect_timeout: Duration,

    /// Service name used in tracing spans and records.
    pub service_name: &'static str,
}

impl Default for GrpcClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            service_name: "grpc_client",
        }
    }
}

impl GrpcClientConfig {
    /// Create a new configuration with the given service name.
    pub fn new(service_name: &'static str) -> Self {
        Self {
            service_name,
            ..Default::default()
        }
    }

    /// Set the connect timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

/// Build a tonic `Endpoint` with connect timeout and keepalive settings.
///
/// Configures:
/// - Connect timeout
/// - TCP keepalive (30 seconds)
/// - HTTP/2 keepalive interval (30 seconds)
/// - Keepalive timeout (10 seconds)
/// - Keep alive while idle
fn build_endpoint(uri: String, cfg: &GrpcClientConfig) -> Result<Endpoint, tonic::transport::Error> {
    let endpoint = Endpoint::from_shared(uri)?
        .connect_timeout(cfg.connect_timeout)
        .tcp_keepalive(Some(TCP_KEEPALIVE))
        .http2_keep_alive_interval(HTTP2_KEEPALIVE_INTERVAL)
        .keep_alive_timeout(HTTP2_KEEPALIVE_TIMEOUT)
        .keep_alive_while_idle(true);

    Ok(endpoint)
}

/// Connect to a gRPC service, failing if the server cannot be reached now.
///
/// # Errors
/// Returns an error if the URI is invalid or the connection fails.
///
/// # Example
///
/// ```ignore
/// use calc_transport_grpc::client::{connect_with_stack, GrpcClientConfig};
///
/// let config = GrpcClientConfig::new("calculator.Calculator");
/// let client: CalculatorClient<Channel> =
///     connect_with_stack("http://localhost:8081", &config).await?;
/// ```
pub async fn connect_with_stack<TClient>(
    uri: impl Into<String>,
    cfg: &GrpcClientConfig,
) -> anyhow::Result<TClient>
where
    TClient: From<Channel>,
{
    let uri_string = uri.into();
    let span = tracing::debug_span!(
        "grpc_connect",
        service = cfg.service_name,
        uri = %uri_string
    );

    async move {
        let endpoint = build_endpoint(uri_string, cfg)?;
        let channel = endpoint.connect().await?;

        let connect_timeout_ms = duration_to_u64_ms(cfg.connect_timeout);
        tracing::info!(
            service_name = cfg.service_name,
            connect_timeout_ms,
            "gRPC client connected"
        );

        Ok(TClient::from(channel))
    }
    .instrument(span)
    .await
}

/// Create a client whose channel connects on first use.
///
/// Only the URI is validated here; connection errors surface on the first
/// call. Must be called from within a tokio runtime.
///
/// # Errors
/// Returns an error if the URI is invalid.
pub fn connect_lazy_with_stack<TClient>(
    uri: impl Into<String>,
    cfg: &GrpcClientConfig,
) -> anyhow::Result<TClient>
where
    TClient: From<Channel>,
{
    let uri_string = uri.into();
    let endpoint = build_endpoint(uri_string.clone(), cfg)?;
    let channel = endpoint.connect_lazy();

    tracing::debug!(
        service_name = cfg.service_name,
        uri = %uri_string,
        "gRPC client channel created (lazy)"
    );

    Ok(TClient::from(channel))
}
