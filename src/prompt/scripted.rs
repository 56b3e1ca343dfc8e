//! Prompter that replays prepared answers, for tests and automation

use super::Prompter;
use crate::error::ConfigError;
use std::cell::RefCell;
use std::collections::VecDeque;

/// One prepared answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    /// Select the item with this exact label
    Choose(String),
    /// Back out of a selection
    Escape,
    /// Check exactly these labels in a multi-select
    Check(Vec<String>),
    Confirm(bool),
}

impl Answer {
    #[must_use]
    #[inline]
    pub fn text(value: &str) -> Self {
        Self::Text(value.to_owned())
    }

    #[must_use]
    #[inline]
    pub fn choose(label: &str) -> Self {
        Self::Choose(label.to_owned())
    }

    #[must_use]
    #[inline]
    pub fn check(labels: &[&str]) -> Self {
        Self::Check(labels.iter().map(|l| (*l).to_owned()).collect())
    }
}

/// Answers prompts from a queue, failing on a mismatch or when exhausted
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    #[must_use]
    #[inline]
    pub fn new<I: IntoIterator<Item = Answer>>(answers: I) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    /// Prompts shown so far, in order
    #[must_use]
    #[inline]
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    /// Answers not consumed yet
    #[must_use]
    #[inline]
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, prompt: &str) -> Result<Answer, ConfigError> {
        self.asked.borrow_mut().push(prompt.to_owned());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ConfigError::prompt(format!("no scripted answer for '{prompt}'")))
    }
}

fn unexpected(prompt: &str, answer: &Answer) -> ConfigError {
    ConfigError::prompt(format!("unexpected answer {answer:?} for '{prompt}'"))
}

impl Prompter for ScriptedPrompter {
    fn text(&self, prompt: &str, _initial: Option<&str>) -> Result<String, ConfigError> {
        match self.next(prompt)? {
            Answer::Text(value) => Ok(value),
            other => Err(unexpected(prompt, &other)),
        }
    }

    fn select(&self, prompt: &str, items: &[String], _default: usize) -> Result<Option<usize>, ConfigError> {
        match self.next(prompt)? {
            Answer::Escape => Ok(None),
            Answer::Choose(label) => items
                .iter()
                .position(|item| *item == label)
                .map(Some)
                .ok_or_else(|| ConfigError::prompt(format!("'{label}' is not offered by '{prompt}'"))),
            other => Err(unexpected(prompt, &other)),
        }
    }

    fn multi_select(&self, prompt: &str, items: &[&str], _preset: &[bool]) -> Result<Vec<usize>, ConfigError> {
        match self.next(prompt)? {
            Answer::Check(labels) => labels
                .iter()
                .map(|label| {
                    items
                        .iter()
                        .position(|item| *item == label.as_str())
                        .ok_or_else(|| ConfigError::prompt(format!("'{label}' is not offered by '{prompt}'")))
                })
                .collect(),
            other => Err(unexpected(prompt, &other)),
        }
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool, ConfigError> {
        match self.next(prompt)? {
            Answer::Confirm(value) => Ok(value),
            other => Err(unexpected(prompt, &other)),
        }
    }
}
