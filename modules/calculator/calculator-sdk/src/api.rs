//! Calculator API trait and types
//!
//! Contract trait and error type for the calculator service.

use async_trait::async_trait;
use tonic::{Code, Status};

use crate::context::CallContext;
use crate::{OperationRequest, OperationResponse};

/// Calculator API trait
///
/// Four arithmetic operations over two `f64` operands. Every call is bound
/// to the deadline carried by `ctx`.
#[async_trait]
pub trait CalculatorClientV1: Send + Sync {
    /// `a + b`
    async fn add(
        &self,
        ctx: &CallContext,
        req: OperationRequest,
    ) -> Result<OperationResponse, CalculatorError>;

    /// `a - b`
    async fn sub(
        &self,
        ctx: &CallContext,
        req: OperationRequest,
    ) -> Result<OperationResponse, CalculatorError>;

    /// `a * b`
    async fn mul(
        &self,
        ctx: &CallContext,
        req: OperationRequest,
    ) -> Result<OperationResponse, CalculatorError>;

    /// `a / b`, fails with [`CalculatorError::InvalidOperand`] when `b` is zero.
    async fn div(
        &self,
        ctx: &CallContext,
        req: OperationRequest,
    ) -> Result<OperationResponse, CalculatorError>;
}

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The server rejected an operand (division by zero).
    #[error("invalid operand: {0}")]
    InvalidOperand(String),

    /// The session deadline passed before the call completed.
    #[error("deadline exceeded")]
    DeadlineExceeded,

    #[error("gRPC transport error ({code:?}): {message}")]
    Transport { code: Code, message: String },
}

impl CalculatorError {
    /// Map a status returned by the server or the channel.
    ///
    /// Any failure observed after `ctx` expired counts as a deadline miss.
    pub fn from_status(status: &Status, ctx: &CallContext) -> Self {
        match status.code() {
            _ if ctx.is_expired() => Self::DeadlineExceeded,
            Code::DeadlineExceeded => Self::DeadlineExceeded,
            Code::InvalidArgument => Self::InvalidOperand(status.message().to_owned()),
            code => Self::Transport {
                code,
                message: status.message().to_owned(),
            },
        }
    }

    /// gRPC code equivalent of this error.
    pub fn code(&self) -> Code {
        match self {
            Self::InvalidOperand(_) => Code::InvalidArgument,
            Self::DeadlineExceeded => Code::DeadlineExceeded,
            Self::Transport { code, .. } => *code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn live() -> CallContext {
        CallContext::with_timeout(Duration::from_secs(60))
    }

    #[tokio::test]
    async fn invalid_argument_becomes_invalid_operand() {
        let err = CalculatorError::from_status(
            &Status::invalid_argument("divisor cannot be zero"),
            &live(),
        );
        assert_eq!(
            err,
            CalculatorError::InvalidOperand("divisor cannot be zero".to_owned())
        );
        assert_eq!(err.code(), Code::InvalidArgument);
    }

    #[tokio::test]
    async fn other_codes_are_transport_errors() {
        let err = CalculatorError::from_status(&Status::unavailable("connection refused"), &live());
        assert_eq!(err.code(), Code::Unavailable);
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn expired_context_wins_over_status_code() {
        let expired = CallContext::with_timeout(Duration::ZERO);
        let err = CalculatorError::from_status(&Status::cancelled("Timeout expired"), &expired);
        assert_eq!(err, CalculatorError::DeadlineExceeded);
    }

    #[tokio::test]
    async fn server_deadline_maps_to_deadline_exceeded() {
        let err = CalculatorError::from_status(&Status::deadline_exceeded("late"), &live());
        assert_eq!(err, CalculatorError::DeadlineExceeded);
    }
}
