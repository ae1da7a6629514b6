//! Domain service for calculator
//!
//! Contains the core arithmetic. IEEE-754 semantics apply throughout:
//! overflow, infinities and NaN propagate as ordinary results.

use tracing::debug;

use super::error::DomainError;

/// Stateless domain service shared by all gRPC calls.
#[derive(Clone, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing addition");
        a + b
    }

    pub fn sub(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing subtraction");
        a - b
    }

    pub fn mul(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing multiplication");
        a * b
    }

    /// Divide `a` by `b`.
    ///
    /// # Errors
    /// Returns [`DomainError::DivisionByZero`] when `b` equals zero (`-0.0`
    /// included).
    pub fn div(&self, a: f64, b: f64) -> Result<f64, DomainError> {
        debug!(a, b, "performing division");
        if b == 0.0 {
            return Err(DomainError::DivisionByZero);
        }
        Ok(a / b)
    }
}
