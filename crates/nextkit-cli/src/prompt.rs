//! Terminal prompts backed by `dialoguer`.
//!
//! Esc dismisses a multi-select. An interrupted read (Ctrl-C while the
//! terminal is in raw mode) dismisses any prompt. Both count as cancelling.

// Internal imports (std, crate)
use std::io;

// External imports (alphabetized)
use dialoguer::{Input, MultiSelect};
use nextkit_core::{Error, Prompter, Result, SelectOption};

/// Asks on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(
        &mut self,
        prompt: &str,
        placeholder: &str,
        initial: Option<&str>,
    ) -> Result<Option<String>> {
        let mut input = Input::<String>::new().allow_empty(true);
        input = match initial {
            Some(text) => input.with_prompt(prompt).with_initial_text(text),
            None => input.with_prompt(format!("{} ({})", prompt, placeholder)),
        };
        input.interact_text().map(Some).or_else(dismissed)
    }

    fn multi_select(
        &mut self,
        title: &str,
        options: &[SelectOption],
    ) -> Result<Option<Vec<usize>>> {
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        let defaults: Vec<bool> = options.iter().map(|o| o.picked).collect();
        MultiSelect::new()
            .with_prompt(title)
            .items(&labels)
            .defaults(&defaults)
            .interact_opt()
            .or_else(dismissed)
    }
}

/// An interrupted prompt is a cancellation; anything else is a failure
fn dismissed<T>(err: dialoguer::Error) -> Result<Option<T>> {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
            tracing::debug!("Prompt interrupted");
            Ok(None)
        }
        other => Err(Error::Prompt(other.to_string())),
    }
}
