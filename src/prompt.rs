//! User input and interaction handling.

use crate::constants::DEFAULT_DESCRIPTION;
use crate::error::{Error, Result};
use dialoguer::Input;
use log::warn;

/// Source of free-text answers.
pub trait Prompter {
    /// Asks a single question and returns the raw answer, possibly empty.
    fn read_text(&self, prompt: &str) -> Result<String>;
}

/// Interactive prompter reading from the terminal.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn read_text(&self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Answers every question with a fixed value, for non-interactive runs.
pub struct PresetPrompter {
    answer: String,
}

impl PresetPrompter {
    pub fn new<S: Into<String>>(answer: S) -> Self {
        Self { answer: answer.into() }
    }
}

impl Prompter for PresetPrompter {
    fn read_text(&self, _prompt: &str) -> Result<String> {
        Ok(self.answer.clone())
    }
}

/// Asks for the project description, falling back to [`DEFAULT_DESCRIPTION`].
pub fn ask_description(prompter: &dyn Prompter) -> Result<String> {
    let description = prompter.read_text("Write a project description")?;
    if description.is_empty() {
        warn!("No description given, using '{DEFAULT_DESCRIPTION}'");
        return Ok(DEFAULT_DESCRIPTION.to_string());
    }
    Ok(description)
}
