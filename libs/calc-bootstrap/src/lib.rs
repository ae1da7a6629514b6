//! Bootstrap helpers shared by the calculator server and CLI.
//!
//! Every binary follows the same start-up sequence: load layered
//! configuration, initialise logging, then hook OS termination signals
//! into a cancellation token.

pub mod config;
pub mod logging;
pub mod signals;

pub use config::load_layered;
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use signals::{cancel_on_shutdown_signal, wait_for_shutdown};
