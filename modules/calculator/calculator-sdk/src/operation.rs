use std::fmt;
use std::str::FromStr;

use crate::api::{CalculatorClientV1, CalculatorError};
use crate::context::CallContext;
use crate::{OperationRequest, OperationResponse};

/// The four operations offered by the calculator service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

/// Selector text that names none of the operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operation: {0:?}")]
pub struct UnknownOperation(pub String);

impl Operation {
    pub const ALL: [Operation; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Lowercase selector, as typed by a user.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
        }
    }

    /// Method name inside the gRPC service.
    pub const fn route_name(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Sub => "Sub",
            Self::Mul => "Mul",
            Self::Div => "Div",
        }
    }

    /// gRPC path, `/calculator.Calculator/<Method>`.
    pub const fn full_method(self) -> &'static str {
        match self {
            Self::Add => "/calculator.Calculator/Add",
            Self::Sub => "/calculator.Calculator/Sub",
            Self::Mul => "/calculator.Calculator/Mul",
            Self::Div => "/calculator.Calculator/Div",
        }
    }

    /// Dispatch to the matching method of `client`.
    ///
    /// # Errors
    /// Returns whatever the client call returns.
    pub async fn invoke<C>(
        self,
        client: &C,
        ctx: &CallContext,
        req: OperationRequest,
    ) -> Result<OperationResponse, CalculatorError>
    where
        C: CalculatorClientV1 + ?Sized,
    {
        match self {
            Self::Add => client.add(ctx, req).await,
            Self::Sub => client.sub(ctx, req).await,
            Self::Mul => client.mul(ctx, req).await,
            Self::Div => client.div(ctx, req).await,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperation(s.to_owned()))
    }
}
