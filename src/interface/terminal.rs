use std::collections::VecDeque;

use dialoguer::Input;

use crate::error::{NutriError, Result};

/// Line-oriented prompt/response channel used by the session.
pub trait Terminal {
    /// Show `prompt` and return one line of user input.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Show a message to the user.
    fn say(&mut self, message: &str);
}

/// Interactive terminal backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerTerminal;

impl Terminal for DialoguerTerminal {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(input)
    }

    fn say(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Terminal that replays canned answers and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    messages: Vec<String>,
}

impl ScriptedTerminal {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// All messages joined with newlines.
    pub fn output(&self) -> String {
        self.messages.join("\n")
    }

    /// Number of answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Terminal for ScriptedTerminal {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or(NutriError::InputExhausted)
    }

    fn say(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
