pub type Address = usize;
pub type Word = i32;

/// Total size of the computer memory
pub const MEMORY_SIZE: Address = 100;

/// Smallest value a word can hold
pub const WORD_MIN: Word = -9999;

/// Largest value a word can hold
pub const WORD_MAX: Word = 9999;

/// Value typed by the user to stop loading the program.
///
/// It is out of the word range on purpose and never ends up in memory.
pub const SENTINEL: i64 = -99999;

/// Number of memory cells shown on each row of a dump
pub const ROW_WIDTH: Address = 10;

/// An instruction word is `opcode * OPCODE_FACTOR + operand`
pub const OPCODE_FACTOR: Word = 100;

/// Checks if a value fits in a memory word
#[must_use]
pub fn in_word_range(value: i64) -> bool {
    (i64::from(WORD_MIN)..=i64::from(WORD_MAX)).contains(&value)
}

/// Checks if a word is in range
#[must_use]
pub const fn is_word(word: Word) -> bool {
    word >= WORD_MIN && word <= WORD_MAX
}
