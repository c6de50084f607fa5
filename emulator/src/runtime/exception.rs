use thiserror::Error;

use crate::constants::Address;

/// Fatal faults raised while executing a program.
///
/// The messages are the ones shown to the user when the machine stops.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exception {
    /// `READ` got a value that does not fit in a word
    #[error("Out of memory")]
    ReadOutOfRange { address: Address },

    /// An arithmetic result does not fit in the accumulator
    #[error("Out of accumulator limit")]
    AccumulatorOverflow,

    #[error("Attempt to divide by zero")]
    DivByZero,
}
