mod completion;
mod run;

#[derive(clap::Subcommand)]
pub enum Subcommand {
    /// Load a program from the terminal and run it
    Run(self::run::RunOpt),

    /// Generate shell completion scripts
    Completion(self::completion::CompletionOpt),
}

impl Subcommand {
    /// Run a subcommand
    pub fn exec(self) -> anyhow::Result<()> {
        match self {
            Self::Run(opt) => opt.exec(),
            Self::Completion(opt) => opt.exec(),
        }
    }
}
