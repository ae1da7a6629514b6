//! Calculator Module
//!
//! gRPC service performing addition, subtraction, multiplication and
//! division on `f64` operands.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core arithmetic and the division-by-zero policy
//! - `api/grpc/server.rs` - gRPC server implementation
//! - `api/grpc/intercepted.rs` - Per-call logging decorator
//! - `module.rs` - Service composition and serving
//!
//! External consumers should use the `calculator-sdk` crate which provides
//! the gRPC client.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod module;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
