//! Line-oriented prompts with numeric validation.
//!
//! [`validate_number`] is the one validator used for every numeric field;
//! [`Presence`] decides whether a blank answer is allowed.

use std::io::{self, BufRead, Write};

use crate::error::ValidationError;

/// Whether a numeric field may be left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    /// Blank input means "no value".
    Optional,
}

/// Numbers the prompts know how to read.
pub trait Number: Sized {
    fn parse_number(s: &str) -> Option<Self>;
}

impl Number for i64 {
    fn parse_number(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl Number for f64 {
    fn parse_number(s: &str) -> Option<Self> {
        s.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

/// Parse a raw answer as a number.
///
/// Returns `Ok(None)` only for a blank answer to an optional field.
pub fn validate_number<T: Number>(
    raw: &str,
    presence: Presence,
) -> Result<Option<T>, ValidationError> {
    let trimmed = raw.trim();
    match presence {
        Presence::Optional if trimmed.is_empty() => Ok(None),
        Presence::Optional => T::parse_number(trimmed)
            .map(Some)
            .ok_or(ValidationError::NotANumberOrBlank),
        Presence::Required => T::parse_number(trimmed)
            .map(Some)
            .ok_or(ValidationError::NotANumber),
    }
}

/// Asks questions on `output` and reads answers from `input`.
///
/// End of input surfaces as an [`io::ErrorKind::UnexpectedEof`] error so the
/// caller can wind down the session.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask once and return the answer without its line ending. Bytes that
    /// are not UTF-8 are replaced rather than rejected.
    pub fn ask(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{message} ")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Ask until the answer is a number.
    pub fn ask_number<T: Number>(&mut self, message: &str) -> io::Result<T> {
        loop {
            let raw = self.ask(message)?;
            match validate_number(&raw, Presence::Required) {
                Ok(Some(value)) => return Ok(value),
                Ok(None) => writeln!(self.output, "{}", ValidationError::NotANumber)?,
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    /// Ask until the answer is a number or blank.
    pub fn ask_optional_number<T: Number>(&mut self, message: &str) -> io::Result<Option<T>> {
        loop {
            let raw = self.ask(message)?;
            match validate_number(&raw, Presence::Optional) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
