use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;
use crate::console::Console;
use crate::constants as C;
use crate::dump::Dump;
use crate::messages;

mod exception;
mod instructions;
mod memory;
mod registers;

pub use self::exception::Exception;
pub use self::instructions::{Instruction, Operation};
pub use self::memory::{Memory, MemoryError};
pub use self::registers::Registers;

use self::instructions::Flow;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error(transparent)]
    Exception(#[from] Exception),

    #[error("Input stream closed")]
    InputClosed,

    #[error("Cycle limit exceeded")]
    CycleLimit { limit: u64 },

    #[error("invalid memory access ({0})")]
    InvalidMemoryAccess(#[from] MemoryError),

    #[error("console error: {0}")]
    Console(#[from] std::io::Error),
}

impl ProcessorError {
    /// Whether this error is reported to the user as an abnormal termination
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(
            self,
            Self::Exception(_) | Self::InputClosed | Self::CycleLimit { .. }
        )
    }
}

type Result<T> = std::result::Result<T, ProcessorError>;

/// State of the machine after a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The machine will execute the next instruction
    Running,

    /// A `HALT` stopped the machine
    Halted,
}

#[derive(Debug, Default, Clone)]
pub struct Computer {
    pub registers: Registers,
    pub memory: Memory,
    pub cycles: u64,
    pub config: Config,
}

impl Computer {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Build a computer with a program already in memory
    ///
    /// # Errors
    ///
    /// Fails if the program does not fit in memory.
    pub fn with_program(
        words: &[C::Word],
        config: Config,
    ) -> std::result::Result<Self, MemoryError> {
        Ok(Self {
            memory: Memory::from_words(words)?,
            ..Self::new(config)
        })
    }

    /// Render the registers and the whole memory
    #[must_use]
    pub fn dump(&self) -> Dump<'_> {
        Dump::new(
            &self.memory,
            self.registers.accumulator,
            self.registers.instruction_counter,
        )
    }

    /// Whether the instruction counter went past the end of memory
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.registers.instruction_counter >= C::MEMORY_SIZE
    }

    /// Set the accumulator to the result of an arithmetic operation
    fn set_accumulator(&mut self, result: Option<C::Word>) -> std::result::Result<(), Exception> {
        let value = result
            .filter(|value| C::is_word(*value))
            .ok_or(Exception::AccumulatorOverflow)?;
        self.registers.accumulator = value;
        Ok(())
    }

    /// Execute one fetch-decode-execute cycle
    ///
    /// # Errors
    ///
    /// Fails when the instruction raises an exception, when the input is
    /// exhausted, or when the cycle limit is reached.
    #[tracing::instrument(skip(self, console), level = "debug")]
    pub fn step(&mut self, console: &mut dyn Console) -> Result<Status> {
        if let Some(limit) = self.config.max_cycles {
            if self.cycles >= limit {
                return Err(ProcessorError::CycleLimit { limit });
            }
        }

        let address = self.registers.instruction_counter;
        let word = self.memory.get(address)?;
        let instruction = self.registers.latch(word);
        info!(address, "Executing instruction \"{}\"", instruction);

        let flow = instruction.execute(self, console)?;
        self.cycles += 1;

        let status = match flow {
            Flow::Next => {
                self.registers.instruction_counter += 1;
                Status::Running
            }
            Flow::Jump(target) => {
                let next = self.config.mode.branch_resume(target);
                debug!(destination = target, next, "Jumping");
                self.registers.instruction_counter = next;
                Status::Running
            }
            Flow::Halt if self.config.mode.stops_on_halt() => Status::Halted,
            Flow::Halt => {
                self.registers.instruction_counter += 1;
                Status::Running
            }
        };

        debug!("Register state {}", self.registers);
        Ok(status)
    }

    /// Run the program from address 0 until the end of memory or a `HALT`.
    ///
    /// Faults are reported on the console before being returned, no dump is
    /// shown in that case.
    ///
    /// # Errors
    ///
    /// Returns the fault that stopped the machine.
    #[tracing::instrument(skip(self, console))]
    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        self.registers.instruction_counter = 0;

        while !self.is_finished() {
            match self.step(console) {
                Ok(Status::Running) => {}
                Ok(Status::Halted) => {
                    info!(cycles = self.cycles, "Machine halted");
                    return Ok(());
                }
                Err(e) => {
                    if e.is_fault() {
                        console.write_line(&messages::fault(&e))?;
                        console.write_line(messages::ABNORMAL_TERMINATION)?;
                    }
                    return Err(e);
                }
            }
        }

        info!(cycles = self.cycles, "Reached the end of memory");
        Ok(())
    }
}
