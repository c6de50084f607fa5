use thiserror::Error;

use crate::constants::{Address, Word, MEMORY_SIZE, ROW_WIDTH};

/// Represents errors related to memory manipulations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    /// The given address was past the end of memory
    #[error("invalid address {0}")]
    InvalidAddress(Address),

    /// The operand could not be used as an address
    #[error("negative address {0}")]
    NegativeAddress(Word),

    /// The program does not fit in memory
    #[error("program of {0} words does not fit in memory")]
    ProgramTooLarge(usize),
}

/// Holds the memory cells of the computer.
///
/// It has 100 cells, all set to zero on startup. Cells are not typed: the same
/// word can be executed as an instruction and read as data.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    inner: [Word; MEMORY_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            inner: [0; MEMORY_SIZE],
        }
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.inner.iter().filter(|w| **w != 0).count();
        write!(f, "Memory {{ non-zero cells: {used} }}")
    }
}

impl Memory {
    /// Build a memory with the given words at the start, and zeroes after
    ///
    /// # Errors
    ///
    /// Fails if there are more words than memory cells.
    pub fn from_words(words: &[Word]) -> Result<Self, MemoryError> {
        let mut memory = Self::default();
        let target = memory
            .inner
            .get_mut(..words.len())
            .ok_or(MemoryError::ProgramTooLarge(words.len()))?;
        target.copy_from_slice(words);
        Ok(memory)
    }

    /// Get the word at an address
    ///
    /// # Errors
    ///
    /// It fails if the address is out of bounds.
    pub fn get(&self, address: Address) -> Result<Word, MemoryError> {
        self.inner
            .get(address)
            .copied()
            .ok_or(MemoryError::InvalidAddress(address))
    }

    /// Get a mutable reference to the word at an address
    ///
    /// # Errors
    ///
    /// It fails if the address is out of bounds.
    pub fn get_mut(&mut self, address: Address) -> Result<&mut Word, MemoryError> {
        self.inner
            .get_mut(address)
            .ok_or(MemoryError::InvalidAddress(address))
    }

    /// Iterate over the memory by rows of [`ROW_WIDTH`] cells, with the address of the first cell
    pub fn rows(&self) -> impl Iterator<Item = (Address, &[Word])> {
        self.inner
            .chunks(ROW_WIDTH)
            .enumerate()
            .map(|(row, cells)| (row * ROW_WIDTH, cells))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_on_startup_test() {
        let memory = Memory::default();
        assert!(memory.as_slice().iter().all(|w| *w == 0));
        assert_eq!(memory.as_slice().len(), MEMORY_SIZE);
    }

    #[test]
    fn bounds_test() {
        let mut memory = Memory::default();
        *memory.get_mut(99).unwrap() = -42;
        assert_eq!(memory.get(99), Ok(-42));
        assert_eq!(memory.get(100), Err(MemoryError::InvalidAddress(100)));
        assert!(memory.get_mut(100).is_err());
    }

    #[test]
    fn from_words_test() {
        let memory = Memory::from_words(&[1007, 4300]).unwrap();
        assert_eq!(memory.get(0), Ok(1007));
        assert_eq!(memory.get(1), Ok(4300));
        assert_eq!(memory.get(2), Ok(0));

        let too_big = vec![0; MEMORY_SIZE + 1];
        assert_eq!(
            Memory::from_words(&too_big),
            Err(MemoryError::ProgramTooLarge(MEMORY_SIZE + 1))
        );
    }

    #[test]
    fn rows_test() {
        let memory = Memory::default();
        let starts: Vec<_> = memory.rows().map(|(start, cells)| (start, cells.len())).collect();
        assert_eq!(starts.len(), 10);
        assert_eq!(starts[0], (0, 10));
        assert_eq!(starts[9], (90, 10));
    }
}
