//! Integration tests for the gRPC client transport stack

use calc_transport_grpc::client::{connect_lazy_with_stack, connect_with_stack, GrpcClientConfig};
use std::time::Duration;
use tonic::transport::Channel;

#[derive(Clone)]
struct FakeClient {
    _channel: Channel,
}

impl From<Channel> for FakeClient {
    fn from(channel: Channel) -> Self {
        Self { _channel: channel }
    }
}

#[test]
fn default_config_is_sane() {
    let cfg = GrpcClientConfig::default();

    assert!(
        cfg.connect_timeout > Duration::from_millis(0),
        "connect_timeout should be positive"
    );
    assert!(
        !cfg.service_name.is_empty(),
        "service_name should not be empty"
    );
}

#[test]
fn config_builder_pattern_works() {
    let cfg = GrpcClientConfig::new("calculator.Calculator")
        .with_connect_timeout(Duration::from_secs(5));

    assert_eq!(cfg.service_name, "calculator.Calculator");
    assert_eq!(cfg.connect_timeout, Duration::from_secs(5));
}

// Nothing listens on the TEST-NET address, so the connect timeout decides.
#[tokio::test]
async fn connect_with_stack_fails_without_server() {
    let cfg = GrpcClientConfig::new("test").with_connect_timeout(Duration::from_millis(100));

    let result = connect_with_stack::<FakeClient>("http://192.0.2.1:50051", &cfg).await;

    assert!(
        result.is_err(),
        "Should fail to connect to non-existent server"
    );
}

#[tokio::test]
async fn connect_with_stack_rejects_invalid_uri() {
    let cfg = GrpcClientConfig::default();

    let result = connect_with_stack::<FakeClient>("http://bad host:8081", &cfg).await;
    assert!(result.is_err(), "Should fail with invalid URI");
}

#[tokio::test]
async fn lazy_connect_does_not_touch_the_network() {
    let cfg = GrpcClientConfig::new("test");

    // Port 1 is closed; a lazy channel must still be created.
    let result = connect_lazy_with_stack::<FakeClient>("http://127.0.0.1:1", &cfg);
    assert!(result.is_ok());
}

#[tokio::test]
async fn lazy_connect_still_validates_uri() {
    let cfg = GrpcClientConfig::new("test");

    let result = connect_lazy_with_stack::<FakeClient>("http://bad host:8081", &cfg);
    assert!(result.is_err());
}

#[test]
fn config_has_debug_impl() {
    let cfg = GrpcClientConfig::default();
    let debug_str = format!("{cfg:?}");

    assert!(debug_str.contains("GrpcClientConfig"));
}
