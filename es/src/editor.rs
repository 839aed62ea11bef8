//! Interactive editing of a document's variables
//!
//! The editor turns each variable line into a [`PromptSpec`], hands the batch to a
//! [`Prompter`], and writes the answers back onto the matching records. Answers are
//! keyed by line index, so a document's prompts and its records always line up.

use std::collections::BTreeMap;

use tracing::debug;

use crate::document::FileDocument;
use crate::error::PromptError;
use crate::prompt::{PromptOutcome, Prompter};

/// One question to put to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    /// Index of the variable line in its document
    pub id: usize,

    /// Shown to the user; the variable's key
    pub label: String,

    /// Pre-filled suggestion; the default value
    pub initial: Option<String>,
}

/// Entered text keyed by line index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers(BTreeMap<usize, String>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: usize, value: impl Into<String>) {
        self.0.insert(id, value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.0.iter().map(|(id, value)| (*id, value.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(usize, S)> for Answers {
    fn from_iter<I: IntoIterator<Item = (usize, S)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(id, value)| (id, value.into())).collect())
    }
}

/// What happened to a document during editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// No variable lines; nothing was asked
    Skipped,

    /// Answers were collected and `applied` of them matched a variable
    Edited { applied: usize },

    /// The user aborted the prompt session
    Cancelled,
}

/// Prompt specs for every variable line, in line order
pub fn prompts(doc: &FileDocument) -> Vec<PromptSpec> {
    doc.variables()
        .map(|(id, var)| PromptSpec {
            id,
            label: var.key.clone(),
            initial: var.default_value.clone(),
        })
        .collect()
}

/// Apply answers to their variable records, returning how many matched.
///
/// Ids beyond the document or pointing at non-variable lines are ignored.
pub fn apply_answers(doc: &mut FileDocument, answers: &Answers) -> usize {
    let mut applied = 0;
    for (id, value) in answers.iter() {
        match doc.lines.get_mut(id).and_then(|line| line.as_variable_mut()) {
            Some(var) => {
                var.edited_value = Some(value.to_string());
                applied += 1;
            }
            None => debug!(id, path = %doc.path.display(), "apply_answers: no variable at index, ignoring"),
        }
    }
    applied
}

/// Run one prompt session for `doc` and apply the answers.
///
/// Documents without variables are skipped without touching the prompter.
pub fn edit(doc: &mut FileDocument, title: &str, prompter: &mut dyn Prompter) -> Result<EditOutcome, PromptError> {
    let specs = prompts(doc);
    if specs.is_empty() {
        debug!(path = %doc.path.display(), "edit: no variables, skipping");
        return Ok(EditOutcome::Skipped);
    }

    debug!(path = %doc.path.display(), prompts = specs.len(), "edit: prompting");
    match prompter.ask(title, &specs)? {
        PromptOutcome::Answered(answers) => {
            if answers.is_empty() {
                debug!(path = %doc.path.display(), "edit: no answers given");
            }
            let applied = apply_answers(doc, &answers);
            debug!(applied, answers = answers.len(), "edit: answers applied");
            Ok(EditOutcome::Edited { applied })
        }
        PromptOutcome::Cancelled => {
            debug!(path = %doc.path.display(), "edit: cancelled");
            Ok(EditOutcome::Cancelled)
        }
    }
}
