//! User interaction seam
//!
//! The pipeline never talks to the terminal directly; it goes through a
//! [`Prompter`]. [`TerminalPrompter`] is the interactive implementation, and tests
//! substitute scripted ones.

use std::path::PathBuf;

use crate::editor::{Answers, PromptSpec};
use crate::error::PromptError;

mod terminal;

pub use terminal::{SelectionInput, TerminalPrompter, parse_selection_input};

/// Result of a prompt that the user may abort
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome<T> {
    Answered(T),
    Cancelled,
}

/// A discovered file offered for selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,

    /// Root-relative display name
    pub label: String,
}

/// Source of user decisions
pub trait Prompter {
    /// Confirm which candidates to process. All start out selected; an empty
    /// result is a valid answer.
    fn select(&mut self, candidates: &[Candidate]) -> Result<PromptOutcome<Vec<PathBuf>>, PromptError>;

    /// Ask every prompt in order under a `title` header, returning answers keyed
    /// by prompt id.
    fn ask(&mut self, title: &str, prompts: &[PromptSpec]) -> Result<PromptOutcome<Answers>, PromptError>;
}
