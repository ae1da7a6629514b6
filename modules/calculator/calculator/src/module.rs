//! Calculator service composition
//!
//! Builds the service, wraps it in the logging decorator, registers it
//! into a set of routes and serves those on a bound listener.

use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tonic::service::{Routes, RoutesBuilder};

use calculator_sdk::{CalculatorServer, SERVICE_NAME};

use crate::api::grpc::{CalculatorServiceImpl, Intercepted};
use crate::domain::Service;

/// The full server-side stack for the calculator service.
pub type CalculatorStack = CalculatorServer<Intercepted<CalculatorServiceImpl>>;

/// The calculator implementation behind the call-logging decorator.
pub fn intercepted_service() -> Intercepted<CalculatorServiceImpl> {
    let service = Arc::new(Service::new());
    Intercepted::new(CalculatorServiceImpl::new(service))
}

/// Build the calculator service with call logging.
pub fn calculator_service() -> CalculatorStack {
    CalculatorServer::new(intercepted_service())
}

/// Routes exposing the calculator service.
pub fn routes() -> Routes {
    let mut routes = RoutesBuilder::default();
    routes.add_service(calculator_service());
    tracing::debug!(service = SERVICE_NAME, "gRPC service registered");
    routes.routes()
}

/// Serve the calculator on `listener` until `cancel` fires.
///
/// # Errors
/// Returns an error if the server fails.
pub async fn serve(listener: TcpListener, cancel: CancellationToken) -> Result<()> {
    calc_transport_grpc::server::serve_tcp(listener, routes(), cancel).await
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use calculator_sdk::{Calculator, Operation, OperationRequest};
    use tonic::{Code, Request};
    use tracing_test::traced_test;

    fn records<'a>(lines: &[&'a str], kind: &str, method: &str) -> Vec<&'a str> {
        lines
            .iter()
            .copied()
            .filter(|l| l.contains(kind) && l.contains(method))
            .collect()
    }

    #[tokio::test]
    #[traced_test]
    async fn every_call_is_logged_once_before_and_after() {
        let svc = intercepted_service();

        let sum = svc
            .add(Request::new(OperationRequest { a: 2.0, b: 3.0 }))
            .await
            .unwrap();
        assert_eq!(sum.into_inner().result, 5.0);

        let status = svc
            .div(Request::new(OperationRequest { a: 10.0, b: 0.0 }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);

        logs_assert(|lines: &[&str]| {
            for (op, expected) in [
                (Operation::Add, "status=Ok"),
                (Operation::Div, "status=InvalidArgument"),
            ] {
                let method = op.full_method();
                let received = records(lines, "call received", method);
                let completed = records(lines, "call completed", method);
                if received.len() != 1 || completed.len() != 1 {
                    return Err(format!(
                        "{method}: {} received, {} completed",
                        received.len(),
                        completed.len()
                    ));
                }
                if !completed[0].contains(expected) {
                    return Err(format!("{method}: expected {expected} in {}", completed[0]));
                }
            }
            Ok(())
        });
    }
}
