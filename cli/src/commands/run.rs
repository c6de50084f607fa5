use std::io::IsTerminal;

use clap::Parser;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use simpletron::console::BufferedConsole;
use simpletron::{Config, Mode};
use tracing::{debug, info};

use crate::interactive::TerminalConsole;

static BANNER: &str = "\
*** Welcome to Simpletron! ***
*** Please enter your program one instruction ***
*** (or data word) at a time. I will type the ***
*** location number and a question mark (?).  ***
*** You then type the word for that location. ***
*** Type the sentinel -99999 to stop entering ***
*** your program. ***";

#[derive(Parser, Debug)]
pub struct RunOpt {
    /// How branches and HALT behave.
    ///
    /// With `strict-legacy`, a branch to k resumes at k + 1 and HALT does not
    /// stop the machine. With `corrected`, a branch to k resumes at k and HALT
    /// stops the machine.
    #[arg(
        short,
        long,
        default_value_t = Mode::StrictLegacy,
        value_parser = PossibleValuesParser::new(["strict-legacy", "corrected"])
            .try_map(|name| name.parse::<Mode>()),
    )]
    mode: Mode,

    /// Stop the machine with an error after this many cycles
    #[arg(long, value_name = "CYCLES")]
    max_cycles: Option<u64>,

    /// Do not show the welcome banner
    #[arg(short, long)]
    quiet: bool,
}

impl RunOpt {
    pub fn exec(self) -> anyhow::Result<()> {
        let config = Config {
            mode: self.mode,
            max_cycles: self.max_cycles,
        };
        info!(mode = %config.mode, max_cycles = ?config.max_cycles, "Starting machine");

        if !self.quiet {
            println!("{BANNER}");
        }

        let computer = if std::io::stdin().is_terminal() {
            debug!("Reading from a terminal");
            let mut console = TerminalConsole::new()?;
            simpletron::run(&mut console, config)?
        } else {
            debug!("Reading from a pipe");
            let stdin = std::io::stdin().lock();
            let stdout = std::io::stdout().lock();
            let mut console = BufferedConsole::new(stdin, stdout);
            simpletron::run(&mut console, config)?
        };

        info!(
            cycles = computer.cycles,
            registers = %computer.registers,
            "End of program"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_flag_test() {
        let opt = RunOpt::try_parse_from(["run"]).unwrap();
        assert_eq!(opt.mode, Mode::StrictLegacy);

        let opt = RunOpt::try_parse_from(["run", "--mode", "corrected"]).unwrap();
        assert_eq!(opt.mode, Mode::Corrected);

        let opt = RunOpt::try_parse_from(["run", "-m", "strict-legacy", "--max-cycles", "10"]).unwrap();
        assert_eq!(opt.mode, Mode::StrictLegacy);
        assert_eq!(opt.max_cycles, Some(10));

        assert!(RunOpt::try_parse_from(["run", "--mode", "loose"]).is_err());
    }
}
