//! Interactive prompt service the scaffold commands ask questions through.
//!
//! The library never talks to a terminal itself. The CLI provides a
//! `dialoguer`-backed implementation; tests script the answers.

use crate::error::Result;

/// One entry of a multi-select prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    /// Checked when the prompt opens
    pub picked: bool,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, picked: bool) -> Self {
        Self {
            label: label.into(),
            picked,
        }
    }
}

/// Questions a scaffold command can ask. `Ok(None)` means the user cancelled.
pub trait Prompter {
    /// Ask for free text. `placeholder` is a hint only; `initial` pre-fills
    /// the answer.
    fn input(
        &mut self,
        prompt: &str,
        placeholder: &str,
        initial: Option<&str>,
    ) -> Result<Option<String>>;

    /// Ask the user to pick any number of `options`; returns chosen indices.
    fn multi_select(
        &mut self,
        title: &str,
        options: &[SelectOption],
    ) -> Result<Option<Vec<usize>>>;
}
