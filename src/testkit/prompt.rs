//! Fixed-answer confirmation prompt.

use crate::error::Result;
use crate::port::outbound::prompt::Confirmation;

/// Answers every prompt with the same line and counts how often it was asked.
#[derive(Debug, Clone)]
pub struct ScriptedPrompt {
    answer: String,
    asked: usize,
}

impl ScriptedPrompt {
    pub fn answering(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            asked: 0,
        }
    }

    /// Number of prompts shown so far.
    pub fn asked(&self) -> usize {
        self.asked
    }
}

impl Confirmation for ScriptedPrompt {
    fn ask(&mut self, _message: &str) -> Result<String> {
        self.asked += 1;
        Ok(self.answer.clone())
    }
}
