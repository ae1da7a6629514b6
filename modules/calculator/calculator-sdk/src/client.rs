//! gRPC client implementation of `CalculatorClientV1`

use anyhow::Result;
use async_trait::async_trait;
use calc_transport_grpc::client::{connect_lazy_with_stack, connect_with_stack, GrpcClientConfig};
use tonic::transport::Channel;

use crate::api::{CalculatorClientV1, CalculatorError};
use crate::context::CallContext;
use crate::operation::Operation;
use crate::proto::calculator_client::CalculatorClient;
use crate::{OperationRequest, OperationResponse};

/// gRPC client implementation of `CalculatorClientV1`
#[derive(Clone)]
pub struct CalculatorGrpcClient {
    inner: CalculatorClient<Channel>,
}

impl CalculatorGrpcClient {
    /// Connect now; fails if the server is unreachable.
    pub async fn connect(uri: impl Into<String>, cfg: &GrpcClientConfig) -> Result<Self> {
        let channel: Channel = connect_with_stack(uri, cfg).await?;
        Ok(Self::from_channel(channel))
    }

    /// Connect on first call. Only the URI is checked here.
    pub fn connect_lazy(uri: impl Into<String>, cfg: &GrpcClientConfig) -> Result<Self> {
        let channel: Channel = connect_lazy_with_stack(uri, cfg)?;
        Ok(Self::from_channel(channel))
    }

    pub fn from_channel(channel: Channel) -> Self {
        Self {
            inner: CalculatorClient::new(channel),
        }
    }

    async fn call(
        &self,
        op: Operation,
        ctx: &CallContext,
        req: OperationRequest,
    ) -> Result<OperationResponse, CalculatorError> {
        if ctx.is_expired() {
            return Err(CalculatorError::DeadlineExceeded);
        }

        let mut client = self.inner.clone();
        let mut request = tonic::Request::new(req);
        request.set_timeout(ctx.remaining());

        let call = async move {
            match op {
                Operation::Add => client.add(request).await,
                Operation::Sub => client.sub(request).await,
                Operation::Mul => client.mul(request).await,
                Operation::Div => client.div(request).await,
            }
        };

        match tokio::time::timeout_at(ctx.deadline(), call).await {
            Ok(Ok(response)) => Ok(response.into_inner()),
            Ok(Err(status)) => {
                tracing::debug!(
                    method = op.full_method(),
                    code = ?status.code(),
                    message = status.message(),
                    "calculator call failed"
                );
                Err(CalculatorError::from_status(&status, ctx))
            }
            Err(_elapsed) => Err(CalculatorError::DeadlineExceeded),
        }
    }
}

#[async_trait]
impl CalculatorClientV1 for CalculatorGrpcClient {
    async fn add(
        &self,
        ctx: &CallContext,
        req: OperationRequest,
    ) -> Result<OperationResponse, CalculatorError> {
        self.call(Operation::Add, ctx, req).await
    }

    async fn sub(
        &self,
        ctx: &CallContext,
        req: OperationRequest,
    ) -> Result<OperationResponse, CalculatorError> {
        self.call(Operation::Sub, ctx, req).await
    }

    async fn mul(
        &self,
        ctx: &CallContext,
        req: OperationRequest,
    ) -> Result<OperationResponse, CalculatorError> {
        self.call(Operation::Mul, ctx, req).await
    }

    async fn div(
        &self,
        ctx: &CallContext,
        req: OperationRequest,
    ) -> Result<OperationResponse, CalculatorError> {
        self.call(Operation::Div, ctx, req).await
    }
}
