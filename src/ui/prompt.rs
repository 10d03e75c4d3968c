use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

/// Source of user answers for the menu loop
pub trait Prompter {
    /// Pick one of `items`, returning its index
    fn select(&mut self, message: &str, items: &[&str]) -> Result<usize>;

    /// Ask for a non-blank line of text; `required` is shown on blank input
    fn input(&mut self, message: &str, required: &str) -> Result<String>;
}

/// Interactive prompts on the controlling terminal
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, message: &str, items: &[&str]) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact()
            .context("Failed to read menu selection")
    }

    fn input(&mut self, message: &str, required: &str) -> Result<String> {
        let required = required.to_string();
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .validate_with(move |input: &String| -> Result<(), String> {
                if input.trim().is_empty() {
                    Err(required.clone())
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map(|answer| answer.trim().to_string())
            .context("Failed to read input")
    }
}
