#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod client;
pub mod interceptor;
pub mod server;

pub use interceptor::{code_of, observe_unary};
