//! Interactive calculator client.
//!
//! Reads an operation and two operands per round from a console, sends
//! them to the calculator service and prints the result, until the user
//! types `exit`, input ends or the session deadline passes.

pub mod config;
pub mod input;
pub mod session;

pub use input::{Console, InputError};
pub use session::{run_session, SessionEnd, EXIT_KEYWORD};
