//! Interactive loading of a program into memory, one word per address.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::console::{parse_input, Console, Input};
use crate::constants as C;
use crate::messages;
use crate::runtime::{Memory, MemoryError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Input stream closed")]
    InputClosed { address: C::Address },

    #[error("value {value} does not fit in a word")]
    OutOfRange { value: i64 },

    #[error("invalid memory access ({0})")]
    InvalidMemoryAccess(#[from] MemoryError),

    #[error("console error: {0}")]
    Console(#[from] std::io::Error),
}

impl LoadError {
    /// Whether this error is reported to the user as an abnormal termination
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(self, Self::InputClosed { .. })
    }
}

/// Decides if a typed value can be accepted while loading.
///
/// The sentinel is accepted even though it is not a valid word, so that it
/// can end the loading.
#[must_use]
pub fn validate(value: i64) -> bool {
    value == C::SENTINEL || C::in_word_range(value)
}

/// How the loading ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Number of words stored, not counting the sentinel
    pub words: usize,

    /// Whether the sentinel was typed, as opposed to memory being full
    pub terminated_by_sentinel: bool,
}

/// Ask for words until the sentinel is typed or the memory is full.
///
/// Rejected values are reported and asked again for the same address.
///
/// # Errors
///
/// Fails if the input is closed before the loading ends.
#[tracing::instrument(skip(console, memory))]
pub fn load(console: &mut dyn Console, memory: &mut Memory) -> Result<LoadSummary, LoadError> {
    for address in 0..C::MEMORY_SIZE {
        let value = loop {
            let line = console
                .prompt(&messages::load_prompt(address))?
                .ok_or(LoadError::InputClosed { address })?;

            match parse_input(&line) {
                Input::Number(value) if validate(value) => break value,
                _ => {
                    warn!(address, input = line.trim(), "Rejected input");
                    console.write_line(messages::UNKNOWN_INSTRUCTION)?;
                    console.write_line(messages::ENTER_AGAIN)?;
                }
            }
        };

        if value == C::SENTINEL {
            info!(words = address, "Sentinel found, loading stopped");
            *memory.get_mut(address)? = 0;
            return Ok(LoadSummary {
                words: address,
                terminated_by_sentinel: true,
            });
        }

        // Accepted values other than the sentinel are in the word range
        let word = C::Word::try_from(value).map_err(|_| LoadError::OutOfRange { value })?;
        debug!(address, word, "Storing word");
        *memory.get_mut(address)? = word;
    }

    info!("Memory is full, loading stopped");
    Ok(LoadSummary {
        words: C::MEMORY_SIZE,
        terminated_by_sentinel: false,
    })
}
