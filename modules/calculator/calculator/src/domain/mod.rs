//! Domain layer for calculator module
//!
//! Contains the arithmetic and its error policy.

pub mod error;
pub mod service;

pub use error::DomainError;
pub use service::Service;
