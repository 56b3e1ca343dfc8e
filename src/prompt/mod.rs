//! Interactive input abstraction
//!
//! Menus ask for plain values through a [`Prompter`]; each call blocks until
//! the user answers.

pub mod scripted;
pub mod terminal;

pub use scripted::{Answer, ScriptedPrompter};
pub use terminal::TerminalPrompter;

use crate::error::ConfigError;

/// Source of interactive answers
pub trait Prompter {
    /// Ask for a line of text, pre-filled with `initial`
    fn text(&self, prompt: &str, initial: Option<&str>) -> Result<String, ConfigError>;

    /// Pick one item; `None` when the user backs out
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>, ConfigError>;

    /// Pick any number of items; `preset` marks the initially checked ones
    fn multi_select(&self, prompt: &str, items: &[&str], preset: &[bool]) -> Result<Vec<usize>, ConfigError>;

    /// Yes/no question
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, ConfigError>;
}
