use parse_display::Display;
use tracing::{debug, warn};

use crate::console::{parse_input, Console, Input};
use crate::constants as C;
use crate::messages;

use super::{exception::Exception, memory::MemoryError, Computer, ProcessorError};

/// Operation codes understood by the machine.
///
/// Any other code decodes to [`Operation::Unknown`], which executes as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(style = "UPPERCASE")]
pub enum Operation {
    /// Read a word from the terminal into memory
    Read,

    /// Write a word from memory to the terminal
    Write,

    /// Load a word from memory into the accumulator
    Load,

    /// Store the accumulator into memory
    Store,

    /// Add a word from memory to the accumulator
    Add,

    /// Subtract a word from memory from the accumulator
    Subtract,

    /// Divide the accumulator by a word from memory
    Divide,

    /// Multiply the accumulator by a word from memory
    Multiply,

    /// Unconditional jump
    Branch,

    /// Jump if the accumulator is negative
    BranchNeg,

    /// Jump if the accumulator is zero
    BranchZero,

    /// Show the machine state
    Halt,

    /// Not an operation. Executing it does nothing.
    #[display("UNKNOWN({0})")]
    Unknown(C::Word),
}

impl Operation {
    #[must_use]
    pub const fn from_code(code: C::Word) -> Self {
        match code {
            10 => Self::Read,
            11 => Self::Write,
            20 => Self::Load,
            21 => Self::Store,
            30 => Self::Add,
            31 => Self::Subtract,
            32 => Self::Divide,
            33 => Self::Multiply,
            40 => Self::Branch,
            41 => Self::BranchNeg,
            42 => Self::BranchZero,
            43 => Self::Halt,
            other => Self::Unknown(other),
        }
    }

    #[must_use]
    pub const fn code(self) -> C::Word {
        match self {
            Self::Read => 10,
            Self::Write => 11,
            Self::Load => 20,
            Self::Store => 21,
            Self::Add => 30,
            Self::Subtract => 31,
            Self::Divide => 32,
            Self::Multiply => 33,
            Self::Branch => 40,
            Self::BranchNeg => 41,
            Self::BranchZero => 42,
            Self::Halt => 43,
            Self::Unknown(code) => code,
        }
    }
}

/// A decoded word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{operation} {operand}")]
pub struct Instruction {
    pub operation: Operation,
    pub operand: C::Word,
}

/// What the execution cycle should do after an instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Go on with the following address
    Next,

    /// A branch was taken to this address
    Jump(C::Address),

    /// A `HALT` instruction was executed
    Halt,
}

impl Instruction {
    /// Decode a word, truncating towards zero like the hardware does
    #[must_use]
    pub const fn decode(word: C::Word) -> Self {
        Self {
            operation: Operation::from_code(word / C::OPCODE_FACTOR),
            operand: word % C::OPCODE_FACTOR,
        }
    }

    #[must_use]
    pub const fn code(&self) -> C::Word {
        self.operation.code()
    }

    /// The operand, as a memory address
    ///
    /// # Errors
    ///
    /// Fails if the operand is negative, which only happens for unknown operations.
    pub fn address(&self) -> Result<C::Address, MemoryError> {
        C::Address::try_from(self.operand).map_err(|_| MemoryError::NegativeAddress(self.operand))
    }

    /// Execute the instruction
    #[tracing::instrument(skip(computer, console))]
    pub(crate) fn execute(
        &self,
        computer: &mut Computer,
        console: &mut dyn Console,
    ) -> Result<Flow, ProcessorError> {
        use Operation::{
            Add, Branch, BranchNeg, BranchZero, Divide, Halt, Load, Multiply, Read, Store,
            Subtract, Unknown, Write,
        };

        match self.operation {
            Read => {
                let address = self.address()?;
                let word = read_word(console)?
                    .and_then(|value| C::Word::try_from(value).ok())
                    .filter(|word| C::is_word(*word))
                    .ok_or(Exception::ReadOutOfRange { address })?;
                debug!(address, word, "Storing input");
                *computer.memory.get_mut(address)? = word;
            }

            Write => {
                let word = computer.memory.get(self.address()?)?;
                console.write_line(&word.to_string())?;
            }

            Load => {
                computer.registers.accumulator = computer.memory.get(self.address()?)?;
            }

            Store => {
                *computer.memory.get_mut(self.address()?)? = computer.registers.accumulator;
            }

            Add => {
                let a = computer.registers.accumulator;
                let b = computer.memory.get(self.address()?)?;
                let res = a.checked_add(b);
                debug!("{} + {} = {:?}", a, b, res);
                computer.set_accumulator(res)?;
            }

            Subtract => {
                let a = computer.registers.accumulator;
                let b = computer.memory.get(self.address()?)?;
                let res = a.checked_sub(b);
                debug!("{} - {} = {:?}", a, b, res);
                computer.set_accumulator(res)?;
            }

            Divide => {
                let a = computer.registers.accumulator;
                let b = computer.memory.get(self.address()?)?;
                if b == 0 {
                    return Err(Exception::DivByZero.into());
                }
                // Integer division in Rust truncates towards zero
                let res = a.checked_div(b);
                debug!("{} / {} = {:?}", a, b, res);
                computer.set_accumulator(res)?;
            }

            Multiply => {
                let a = computer.registers.accumulator;
                let b = computer.memory.get(self.address()?)?;
                let res = a.checked_mul(b);
                debug!("{} * {} = {:?}", a, b, res);
                computer.set_accumulator(res)?;
            }

            Branch => return Ok(Flow::Jump(self.address()?)),

            BranchNeg => {
                if computer.registers.accumulator < 0 {
                    return Ok(Flow::Jump(self.address()?));
                }
            }

            BranchZero => {
                if computer.registers.accumulator == 0 {
                    return Ok(Flow::Jump(self.address()?));
                }
            }

            Halt => {
                console.write_line(messages::EXECUTION_TERMINATED)?;
                console.write(&computer.dump().to_string())?;
                return Ok(Flow::Halt);
            }

            Unknown(code) => {
                debug!(code, "Ignoring unknown operation");
            }
        }

        Ok(Flow::Next)
    }
}

/// Ask for a number until one is typed.
///
/// Returns `None` if the number does not even fit in 64 bits.
fn read_word(console: &mut dyn Console) -> Result<Option<i64>, ProcessorError> {
    loop {
        let line = console
            .prompt(messages::READ_PROMPT)?
            .ok_or(ProcessorError::InputClosed)?;

        match parse_input(&line) {
            Input::Number(value) => return Ok(Some(value)),
            Input::Overflow => return Ok(None),
            Input::Malformed => warn!(input = line.trim(), "Not a number, asking again"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_test() {
        assert_eq!(
            Instruction::decode(2007),
            Instruction {
                operation: Operation::Load,
                operand: 7
            }
        );
        assert_eq!(
            Instruction::decode(4300),
            Instruction {
                operation: Operation::Halt,
                operand: 0
            }
        );
        assert_eq!(Instruction::decode(4199).address(), Ok(99));
    }

    #[test]
    fn decode_truncates_towards_zero_test() {
        let instruction = Instruction::decode(-5);
        assert_eq!(instruction.operation, Operation::Unknown(0));
        assert_eq!(instruction.operand, -5);
        assert_eq!(instruction.address(), Err(MemoryError::NegativeAddress(-5)));

        let instruction = Instruction::decode(-2050);
        assert_eq!(instruction.operation, Operation::Unknown(-20));
        assert_eq!(instruction.operand, -50);
    }

    #[test]
    fn operation_code_test() {
        for code in -100..100 {
            assert_eq!(Operation::from_code(code).code(), code);
        }
        assert_eq!(Operation::from_code(44), Operation::Unknown(44));
        assert_eq!(Operation::from_code(0), Operation::Unknown(0));
    }

    #[test]
    fn display_test() {
        assert_eq!(Instruction::decode(4108).to_string(), "BRANCHNEG 8");
        assert_eq!(Instruction::decode(1099).to_string(), "READ 99");
        assert_eq!(Instruction::decode(5001).to_string(), "UNKNOWN(50) 1");
    }
}
