//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator service:
//! - API trait (`CalculatorClientV1`) and error type (`CalculatorError`)
//! - The closed `Operation` set and selector parsing
//! - Per-session deadline (`CallContext`)
//! - gRPC client (`CalculatorGrpcClient`)
//! - Proto stubs for server implementation
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorGrpcClient, CallContext, Operation, OperationRequest};
//!
//! let client = CalculatorGrpcClient::connect_lazy("http://localhost:8081", &cfg)?;
//! let ctx = CallContext::with_timeout(Duration::from_secs(60 * 60));
//! let op: Operation = "add".parse()?;
//! let resp = op.invoke(&client, &ctx, OperationRequest { a: 2.0, b: 3.0 }).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
mod context;
mod operation;
pub use api::{CalculatorClientV1, CalculatorError};
pub use context::CallContext;
pub use operation::{Operation, UnknownOperation};

// === GRPC CLIENT ===
mod client;
pub use client::CalculatorGrpcClient;

// === GRPC PROTO STUBS (for server implementation) ===
/// Generated protobuf types for the Calculator service
pub mod proto {
    tonic::include_proto!("calculator");
}

// Re-export proto types needed by server and client
pub use proto::calculator_server::{Calculator, CalculatorServer};
pub use proto::{OperationRequest, OperationResponse};

/// Fully qualified gRPC service name
pub const SERVICE_NAME: &str = "calculator.Calculator";
