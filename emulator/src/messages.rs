//! Fixed lines printed by the machine

pub const UNKNOWN_INSTRUCTION: &str = "*** Unknown instruction ***";
pub const ENTER_AGAIN: &str = "*** Enter again or exit ***";
pub const LOADING_COMPLETED: &str = "*** Program loading completed ***";
pub const EXECUTION_BEGINS: &str = "*** Program execution begins ***";
pub const EXECUTION_TERMINATED: &str = "*** Simpletron execution terminated ***";
pub const ABNORMAL_TERMINATION: &str = "*** Simpletron execution abnormally terminated ***";

/// Prompt shown by the `READ` instruction
pub const READ_PROMPT: &str = "? ";

/// Prompt shown while loading the word at `address`
#[must_use]
pub fn load_prompt(address: crate::constants::Address) -> String {
    format!("{address:02} ? ")
}

/// Wraps a fault description in the machine's banner style
#[must_use]
pub fn fault(description: &dyn std::fmt::Display) -> String {
    format!("*** {description} ***")
}
