use std::borrow::Cow;

use anstyle::Style;
use rustyline::highlight::Highlighter;
use rustyline_derive::{Completer, Helper, Hinter, Validator};

/// Rustyline helper, that shows prompts in bold.
///
/// Input is free-form numbers, so there is nothing to complete or hint.
#[derive(Helper, Completer, Hinter, Validator, Debug, Default)]
pub(crate) struct PromptHelper;

impl Highlighter for PromptHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        let style = Style::new().bold();
        let prompt = format!("{}{prompt}{}", style.render(), style.render_reset());
        Cow::Owned(prompt)
    }
}
