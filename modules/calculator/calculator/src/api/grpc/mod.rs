//! gRPC API layer for calculator

pub mod intercepted;
pub mod server;

pub use intercepted::Intercepted;
pub use server::CalculatorServiceImpl;
