//! gRPC Server implementation for calculator
//!
//! The server implementation handles gRPC requests and delegates
//! to the domain Service for business logic.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use calculator_sdk::{Calculator, OperationRequest, OperationResponse};

use crate::domain::Service;

/// gRPC service implementation that wraps the domain Service.
#[derive(Clone)]
pub struct CalculatorServiceImpl {
    service: Arc<Service>,
}

impl CalculatorServiceImpl {
    /// Create a new gRPC service over the given domain Service.
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl Calculator for CalculatorServiceImpl {
    async fn add(
        &self,
        request: Request<OperationRequest>,
    ) -> Result<Response<OperationResponse>, Status> {
        let req = request.into_inner();
        let result = self.service.add(req.a, req.b);
        Ok(Response::new(OperationResponse { result }))
    }

    async fn sub(
        &self,
        request: Request<OperationRequest>,
    ) -> Result<Response<OperationResponse>, Status> {
        let req = request.into_inner();
        let result = self.service.sub(req.a, req.b);
        Ok(Response::new(OperationResponse { result }))
    }

    async fn mul(
        &self,
        request: Request<OperationRequest>,
    ) -> Result<Response<OperationResponse>, Status> {
        let req = request.into_inner();
        let result = self.service.mul(req.a, req.b);
        Ok(Response::new(OperationResponse { result }))
    }

    async fn div(
        &self,
        request: Request<OperationRequest>,
    ) -> Result<Response<OperationResponse>, Status> {
        let req = request.into_inner();
        let result = self.service.div(req.a, req.b)?;
        Ok(Response::new(OperationResponse { result }))
    }
}
