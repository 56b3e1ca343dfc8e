//! Terminal prompts backed by `dialoguer`

use super::Prompter;
use crate::error::ConfigError;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};

/// Prompts on the controlling terminal
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

fn prompt_error(err: dialoguer::Error) -> ConfigError {
    ConfigError::prompt(err.to_string())
}

impl Prompter for TerminalPrompter {
    fn text(&self, prompt: &str, initial: Option<&str>) -> Result<String, ConfigError> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(initial) = initial {
            input = input.with_initial_text(initial);
        }
        input.interact_text().map_err(prompt_error)
    }

    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>, ConfigError> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()
            .map_err(prompt_error)
    }

    fn multi_select(&self, prompt: &str, items: &[&str], preset: &[bool]) -> Result<Vec<usize>, ConfigError> {
        MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .defaults(preset)
            .interact()
            .map_err(prompt_error)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, ConfigError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }
}
