use parse_display::{Display, FromStr};

use crate::constants::Address;

/// How the machine handles control transfers and `HALT`.
///
/// The historical machine increments the instruction counter after every
/// cycle, including the ones that jumped, and keeps fetching instructions
/// after a `HALT`. Both behaviors are kept as-is in [`Mode::StrictLegacy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, FromStr)]
#[display(style = "kebab-case")]
pub enum Mode {
    /// A branch to `k` resumes at `k + 1`, and `HALT` does not stop the cycle
    #[default]
    StrictLegacy,

    /// A branch to `k` resumes at `k`, and `HALT` stops the machine
    Corrected,
}

impl Mode {
    /// Address of the next instruction after a taken branch to `target`
    #[must_use]
    pub const fn branch_resume(self, target: Address) -> Address {
        match self {
            Self::StrictLegacy => target + 1,
            Self::Corrected => target,
        }
    }

    /// Whether a `HALT` instruction stops the execution cycle
    #[must_use]
    pub const fn stops_on_halt(self) -> bool {
        matches!(self, Self::Corrected)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,

    /// Maximum number of cycles to execute. Unbounded when `None`.
    pub max_cycles: Option<u64>,
}

impl Config {
    #[must_use]
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}
