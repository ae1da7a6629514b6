//! The interactive calculation loop.

use std::io;

use calculator_sdk::{CalculatorClientV1, CallContext, Operation, OperationRequest};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{error, info};

use crate::input::{Console, InputError};

/// Selector that ends the session.
pub const EXIT_KEYWORD: &str = "exit";

pub const OPERATION_PROMPT: &str = "Enter operation (add, sub, mul, div) or 'exit' to quit: ";
pub const FIRST_OPERAND_PROMPT: &str = "Enter first number: ";
pub const SECOND_OPERAND_PROMPT: &str = "Enter second number: ";

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed the exit keyword.
    Exit,
    /// The input stream ended.
    InputClosed,
    /// The session deadline passed.
    DeadlineReached,
}

/// Run rounds of prompt, call and print until the session ends.
///
/// Bad selectors and operands are logged and asked for again; failed calls
/// are logged and the loop continues.
///
/// # Errors
/// Returns an error if writing to the console fails or the input stream
/// itself fails. An undecodable line is not a stream failure.
pub async fn run_session<C, R, W>(
    client: &C,
    ctx: &CallContext,
    console: &mut Console<R, W>,
) -> io::Result<SessionEnd>
where
    C: CalculatorClientV1 + ?Sized,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        if ctx.is_expired() {
            info!("session deadline reached");
            return Ok(SessionEnd::DeadlineReached);
        }

        console.prompt(OPERATION_PROMPT).await?;
        let selector = match console.read_token().await {
            Ok(Some(token)) => token,
            Ok(None) => return Ok(SessionEnd::InputClosed),
            Err(e) => {
                let e = recoverable(e)?;
                error!(error = %e, "failed to read operation");
                continue;
            }
        };

        if selector == EXIT_KEYWORD {
            info!("exit requested");
            return Ok(SessionEnd::Exit);
        }

        let op = match selector.parse::<Operation>() {
            Ok(op) => op,
            Err(e) => {
                error!(error = %e, "invalid operation");
                continue;
            }
        };

        let Some(a) = read_operand(console, FIRST_OPERAND_PROMPT).await? else {
            return Ok(SessionEnd::InputClosed);
        };
        let Some(b) = read_operand(console, SECOND_OPERAND_PROMPT).await? else {
            return Ok(SessionEnd::InputClosed);
        };

        match op.invoke(client, ctx, OperationRequest { a, b }).await {
            Ok(resp) => {
                console
                    .print_line(&format!("Result: {:.2}", resp.result))
                    .await?;
            }
            Err(e) => {
                error!(
                    operation = op.route_name(),
                    code = ?e.code(),
                    error = %e,
                    "calculation failed"
                );
            }
        }
    }
}

/// Prompt until a number is read. `None` on end of input.
async fn read_operand<R, W>(console: &mut Console<R, W>, prompt: &str) -> io::Result<Option<f64>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        console.prompt(prompt).await?;
        match console.read_number().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                let e = recoverable(e)?;
                error!(error = %e, "invalid operand");
            }
        }
    }
}

/// Bad lines are recoverable, a failing input stream is not.
fn recoverable(err: InputError) -> io::Result<InputError> {
    match err {
        InputError::Io(e) if e.kind() != io::ErrorKind::InvalidData => {
            error!(error = %e, "console input failed");
            Err(e)
        }
        other => Ok(other),
    }
}
