//! Terminal input, with line editing and history.
//!
//! It is based on rustyline, which falls back to plain reads when the
//! terminal is not supported.

use std::io::Write;

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Behavior, CompletionType, Config, EditMode, Editor};
use simpletron::console::Console;
use tracing::{debug, info};

mod helper;
use self::helper::PromptHelper;

pub(crate) struct TerminalConsole {
    editor: Editor<PromptHelper, DefaultHistory>,
}

impl TerminalConsole {
    pub(crate) fn new() -> rustyline::Result<Self> {
        let config = Config::builder()
            .history_ignore_space(true)
            .completion_type(CompletionType::List)
            .edit_mode(EditMode::Emacs)
            .behavior(Behavior::PreferTerm)
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(PromptHelper));
        Ok(Self { editor })
    }
}

impl Console for TerminalConsole {
    fn prompt(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) => {
                info!("EOF, no more input");
                Ok(None)
            }
            Err(ReadlineError::Interrupted) => {
                info!("Interrupted, no more input");
                Ok(None)
            }
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => {
                debug!(error = %e, "Could not read line");
                Err(std::io::Error::other(e.to_string()))
            }
        }
    }

    fn write(&mut self, text: &str) -> std::io::Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }
}
