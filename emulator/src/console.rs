//! Line-oriented input and output used by the loader and the machine.
//!
//! Everything the machine prints or asks for goes through a [`Console`]. The
//! CLI plugs a terminal in here, tests use a [`ScriptedConsole`].

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;

pub trait Console {
    /// Show a prompt and read one line of input.
    ///
    /// Returns `None` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors from the underlying streams.
    fn prompt(&mut self, prompt: &str) -> std::io::Result<Option<String>>;

    /// Write some text as-is
    ///
    /// # Errors
    ///
    /// Fails on I/O errors from the underlying stream.
    fn write(&mut self, text: &str) -> std::io::Result<()>;

    /// Write a line of text
    ///
    /// # Errors
    ///
    /// Fails on I/O errors from the underlying stream.
    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        self.write(line)?;
        self.write("\n")
    }
}

/// A console over any buffered reader and writer, like stdin and stdout
#[derive(Debug)]
pub struct BufferedConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> BufferedConsole<R, W> {
    #[must_use]
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    #[must_use]
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Console for BufferedConsole<R, W> {
    fn prompt(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        // Undecodable bytes end up as replacement characters, which parse as garbage
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn write(&mut self, text: &str) -> std::io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}

/// An in-memory console, fed with predefined lines.
///
/// Everything written to it, prompts included, ends up in the transcript.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    transcript: String,
}

impl ScriptedConsole {
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            transcript: String::new(),
        }
    }

    /// Everything that was written so far
    #[must_use]
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Number of lines that were not consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        self.transcript.push_str(prompt);
        let line = self.input.pop_front();
        if let Some(line) = &line {
            // Echo the input, like a terminal would
            self.transcript.push_str(line);
            self.transcript.push('\n');
        }
        Ok(line)
    }

    fn write(&mut self, text: &str) -> std::io::Result<()> {
        self.transcript.push_str(text);
        Ok(())
    }
}

/// What a line of user input turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A decimal integer
    Number(i64),

    /// A decimal integer too large to be represented
    Overflow,

    /// Anything else
    Malformed,
}

/// Parse a line of user input as a signed decimal integer
#[must_use]
pub fn parse_input(line: &str) -> Input {
    match line.trim().parse::<i64>() {
        Ok(number) => Input::Number(number),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Input::Overflow,
            _ => Input::Malformed,
        },
    }
}
