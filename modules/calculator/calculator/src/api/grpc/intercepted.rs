//! Logging decorator over any `Calculator` implementation.

use calc_transport_grpc::observe_unary;
use calculator_sdk::{Calculator, Operation, OperationRequest, OperationResponse};
use tonic::{Request, Response, Status};

/// Wraps an inner service so that every call goes through
/// [`observe_unary`].
#[derive(Clone)]
pub struct Intercepted<S> {
    inner: S,
}

impl<S> Intercepted<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[tonic::async_trait]
impl<S: Calculator> Calculator for Intercepted<S> {
    async fn add(
        &self,
        request: Request<OperationRequest>,
    ) -> Result<Response<OperationResponse>, Status> {
        observe_unary(Operation::Add.full_method(), request, |r| self.inner.add(r)).await
    }

    async fn sub(
        &self,
        request: Request<OperationRequest>,
    ) -> Result<Response<OperationResponse>, Status> {
        observe_unary(Operation::Sub.full_method(), request, |r| self.inner.sub(r)).await
    }

    async fn mul(
        &self,
        request: Request<OperationRequest>,
    ) -> Result<Response<OperationResponse>, Status> {
        observe_unary(Operation::Mul.full_method(), request, |r| self.inner.mul(r)).await
    }

    async fn div(
        &self,
        request: Request<OperationRequest>,
    ) -> Result<Response<OperationResponse>, Status> {
        observe_unary(Operation::Div.full_method(), request, |r| self.inner.div(r)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and fails every division.
    #[derive(Default)]
    struct Recording {
        calls: AtomicUsize,
    }

    #[tonic::async_trait]
    impl Calculator for Recording {
        async fn add(
            &self,
            request: Request<OperationRequest>,
        ) -> Result<Response<OperationResponse>, Status> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let req = request.into_inner();
            Ok(Response::new(OperationResponse { result: req.a + req.b }))
        }

        async fn sub(
            &self,
            _request: Request<OperationRequest>,
        ) -> Result<Response<OperationResponse>, Status> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Status::unimplemented("sub"))
        }

        async fn mul(
            &self,
            _request: Request<OperationRequest>,
        ) -> Result<Response<OperationResponse>, Status> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Status::unimplemented("mul"))
        }

        async fn div(
            &self,
            _request: Request<OperationRequest>,
        ) -> Result<Response<OperationResponse>, Status> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Status::invalid_argument("divisor cannot be zero"))
        }
    }

    #[tokio::test]
    async fn delegates_exactly_once_and_returns_response() {
        let svc = Intercepted::new(Recording::default());

        let resp = svc
            .add(Request::new(OperationRequest { a: 2.0, b: 3.0 }))
            .await
            .unwrap();

        assert_eq!(resp.into_inner().result, 5.0);
        assert_eq!(svc.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn passes_errors_through_unchanged() {
        let svc = Intercepted::new(Recording::default());

        let status = svc
            .div(Request::new(OperationRequest { a: 1.0, b: 0.0 }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(status.message(), "divisor cannot be zero");

        let status = svc
            .mul(Request::new(OperationRequest { a: 1.0, b: 0.0 }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::Unimplemented);
        assert_eq!(svc.inner.calls.load(Ordering::SeqCst), 2);
    }
}
