//! Line-oriented console I/O.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// A read that did not yield exactly one usable value.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("expected one value, got an empty line")]
    Empty,

    #[error("expected one value, got {0}")]
    TooManyTokens(usize),

    #[error("not a number: {0:?}")]
    NotANumber(String),
}

/// Prompts on `writer`, reads whitespace-separated tokens from `reader`.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    line: String,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: String::new(),
        }
    }

    /// Write `text` without a newline and flush.
    pub async fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await
    }

    pub async fn print_line(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await
    }

    /// Read one line holding exactly one token.
    ///
    /// `Ok(None)` means end of input.
    ///
    /// # Errors
    /// Returns an error if the line is empty, holds several tokens or
    /// cannot be read.
    pub async fn read_token(&mut self) -> Result<Option<String>, InputError> {
        self.line.clear();
        if self.reader.read_line(&mut self.line).await? == 0 {
            return Ok(None);
        }

        let mut tokens = self.line.split_whitespace();
        match (tokens.next(), tokens.count()) {
            (None, _) => Err(InputError::Empty),
            (Some(token), 0) => Ok(Some(token.to_owned())),
            (Some(_), rest) => Err(InputError::TooManyTokens(rest + 1)),
        }
    }

    /// Read one line holding exactly one number.
    ///
    /// # Errors
    /// Same as [`Console::read_token`], plus [`InputError::NotANumber`].
    pub async fn read_number(&mut self) -> Result<Option<f64>, InputError> {
        match self.read_token().await? {
            None => Ok(None),
            Some(token) => token
                .parse::<f64>()
                .map(Some)
                .map_err(|_| InputError::NotANumber(token)),
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
