use crate::constants as C;
use crate::dump::{Padded, Signed};

use super::instructions::Instruction;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Result of the last arithmetic operation or load
    pub accumulator: C::Word,

    /// Address of the instruction being executed
    pub instruction_counter: C::Address,

    /// Last fetched word
    pub instruction_register: C::Word,

    /// Operation code decoded from the instruction register
    pub operation_code: C::Word,

    /// Operand decoded from the instruction register
    pub operand: C::Word,
}

impl Registers {
    /// Load a freshly fetched word in the instruction register and decode it
    pub(crate) fn latch(&mut self, word: C::Word) -> Instruction {
        let instruction = Instruction::decode(word);
        self.instruction_register = word;
        self.operation_code = instruction.code();
        self.operand = instruction.operand;
        instruction
    }
}

impl std::fmt::Display for Registers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "accumulator = {} | instructionCounter = {:02} | instructionRegister = {} | operationCode = {} | operand = {}",
            Signed(self.accumulator),
            self.instruction_counter,
            Signed(self.instruction_register),
            Padded(self.operation_code),
            Padded(self.operand),
        )
    }
}
