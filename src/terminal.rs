//! Line-based player input from a terminal or any other reader.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::game::PlayerAction;
use crate::session::Input;

/// Errors returned by [`TerminalInput`].
#[derive(Debug, Error)]
pub enum InputError {
    /// The reader reached end of input.
    #[error("input closed")]
    Closed,
    /// Reading input or writing a prompt failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Reads answers line by line from `reader`, writing prompts to `writer`.
///
/// Lines that do not parse (including lines that are not valid UTF-8) are
/// discarded and the question is asked again. Only end of input or an I/O
/// failure ends the conversation.
pub struct TerminalInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalInput<R, W> {
    /// Creates an input reading from `reader` and prompting on `writer`.
    #[must_use]
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn prompt(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_lowercase())
    }

    fn complain(&mut self, message: &str) -> Result<(), InputError> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Input for TerminalInput<R, W> {
    type Error = InputError;

    fn next_bet(&mut self, balance: u64) -> Result<i64, InputError> {
        loop {
            let line = self.prompt(&format!("\nBALANCE: ${balance} | Enter bet: "))?;
            match line.parse::<i64>() {
                Ok(amount) => return Ok(amount),
                Err(_) => {
                    log::debug!("discarding bet input {line:?}");
                    self.complain("Please enter a whole number.")?;
                }
            }
        }
    }

    fn next_action(&mut self) -> Result<PlayerAction, InputError> {
        loop {
            match self.prompt("ACTION: [h] Hit | [s] Stand: ")?.as_str() {
                "h" | "hit" => return Ok(PlayerAction::Hit),
                "s" | "stand" => return Ok(PlayerAction::Stand),
                _ => self.complain("Unknown action.")?,
            }
        }
    }

    fn play_again(&mut self) -> Result<bool, InputError> {
        loop {
            match self.prompt("\nPlay another round? (y/n): ")?.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.complain("Please answer y or n.")?,
            }
        }
    }
}
