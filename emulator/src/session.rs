use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::console::Console;
use crate::loader::{self, LoadError};
use crate::messages;
use crate::runtime::{Computer, ProcessorError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not load program: {0}")]
    Load(#[from] LoadError),

    #[error("execution failed: {0}")]
    Processor(#[from] ProcessorError),

    #[error("console error: {0}")]
    Console(#[from] std::io::Error),
}

/// Load a program from the console and run it.
///
/// Returns the machine as it was when the execution stopped.
///
/// # Errors
///
/// Fails if the input is closed while loading, or if the machine faults.
/// The failure was already reported on the console in both cases.
#[tracing::instrument(skip(console))]
pub fn run(console: &mut dyn Console, config: Config) -> Result<Computer, SessionError> {
    let mut computer = Computer::new(config);

    let summary = match loader::load(console, &mut computer.memory) {
        Ok(summary) => summary,
        Err(e) => {
            if e.is_fault() {
                console.write_line(&messages::fault(&e))?;
                console.write_line(messages::ABNORMAL_TERMINATION)?;
            }
            return Err(e.into());
        }
    };
    info!(words = summary.words, "Program loaded");
    console.write_line(messages::LOADING_COMPLETED)?;

    console.write_line(messages::EXECUTION_BEGINS)?;
    computer.run(console)?;

    info!(registers = %computer.registers, "End of program");
    Ok(computer)
}
