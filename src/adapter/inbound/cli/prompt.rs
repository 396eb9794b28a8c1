//! Interactive confirmation on the controlling terminal.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::Result;
use crate::port::outbound::prompt::Confirmation;

/// Reads one line from the operator via `dialoguer`.
///
/// Errors when stdin is not a terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Confirmation for TerminalPrompt {
    fn ask(&mut self, message: &str) -> Result<String> {
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}
