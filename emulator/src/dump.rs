//! Rendering of the machine state, shown when a `HALT` is executed.

use std::fmt::{Display, Formatter, Result};

use crate::constants as C;
use crate::runtime::{Instruction, Memory};

/// A word shown as an explicit sign followed by four digits, like `-0005`
#[derive(Debug, Clone, Copy)]
pub struct Signed(pub C::Word);

impl Display for Signed {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        write!(f, "{sign}{:04}", self.0.unsigned_abs())
    }
}

/// A small number shown with at least two digits, like `07` or `-05`
#[derive(Debug, Clone, Copy)]
pub struct Padded(pub C::Word);

impl Display for Padded {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.0 < 0 {
            write!(f, "-")?;
        }
        write!(f, "{:02}", self.0.unsigned_abs())
    }
}

/// Registers and memory of the machine, in a fixed tabular format
#[derive(Debug, Clone, Copy)]
pub struct Dump<'a> {
    memory: &'a Memory,
    accumulator: C::Word,
    instruction_counter: C::Address,
}

impl<'a> Dump<'a> {
    #[must_use]
    pub const fn new(
        memory: &'a Memory,
        accumulator: C::Word,
        instruction_counter: C::Address,
    ) -> Self {
        Self {
            memory,
            accumulator,
            instruction_counter,
        }
    }
}

impl Display for Dump<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        // Past the end of memory there is nothing to decode
        let instruction_register = self
            .memory
            .get(self.instruction_counter)
            .unwrap_or_default();
        let instruction = Instruction::decode(instruction_register);

        writeln!(f, "REGISTERS:")?;
        writeln!(f, "accumulator \t\t{}", Signed(self.accumulator))?;
        writeln!(f, "instructionCounter \t   {:02}", self.instruction_counter)?;
        writeln!(f, "instructionRegister \t{}", Signed(instruction_register))?;
        writeln!(f, "operationCode \t\t   {}", Padded(instruction.code()))?;
        writeln!(f, "operand \t\t   {}", Padded(instruction.operand))?;
        writeln!(f)?;

        writeln!(f, "MEMORY:")?;
        write!(f, "  ")?;
        for column in 0..C::ROW_WIDTH {
            write!(f, " {column:>5}")?;
        }
        writeln!(f)?;

        for (start, cells) in self.memory.rows() {
            write!(f, "{start:02}")?;
            for cell in cells {
                write!(f, " {}", Signed(*cell))?;
            }
            writeln!(f)?;
        }

        writeln!(f)
    }
}
