//! A virtual machine for the Simpletron, a decimal stored-program computer
//! with a hundred words of memory and a single accumulator.

pub mod config;
pub mod console;
pub mod constants;
pub mod dump;
pub mod loader;
pub mod messages;
pub mod runtime;
pub mod session;

pub use self::config::{Config, Mode};
pub use self::runtime::Computer;
pub use self::session::run;
