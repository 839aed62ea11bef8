//! Pipeline controller: discovery through writing
//!
//! The controller runs strictly forward through its stages:
//!
//! ```text
//! Discovering -> Selecting -> [ Parsing -> Editing -> Rendering -> Writing ]* -> Done
//! ```
//!
//! Each selected document passes through the bracketed stages completely before the
//! next one starts, in selection order, so prompts appear in a predictable order
//! and a cancellation leaves exactly the already-written documents on disk.
//! Cancellation and fatal errors end in `Failed`; nothing is rolled back.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::discovery::{self, IgnoreRules};
use crate::document::FileDocument;
use crate::editor::{self, EditOutcome};
use crate::error::{DiscoveryError, PipelineError};
use crate::prompt::{Candidate, PromptOutcome, Prompter};

/// Controller stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Discovering,
    Selecting,
    Parsing,
    Editing,
    Rendering,
    Writing,
    Done,
    Failed,
}

impl Stage {
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Done | Stage::Failed)
    }

    /// Whether the controller may move from `self` to `next`.
    ///
    /// `Writing -> Parsing` starts the next document. A run that finds or selects
    /// nothing goes straight to `Done`.
    pub fn can_advance_to(self, next: Stage) -> bool {
        use Stage::*;
        match (self, next) {
            (Done | Failed, _) => false,
            (_, Failed) => true,
            (Discovering, Selecting)
            | (Discovering, Done)
            | (Selecting, Parsing)
            | (Selecting, Done)
            | (Parsing, Editing)
            | (Editing, Rendering)
            | (Rendering, Writing)
            | (Writing, Parsing)
            | (Writing, Done) => true,
            _ => false,
        }
    }
}

/// How a run ended without a fatal error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every selected document was written
    Completed { written: Vec<PathBuf> },

    /// Discovery found no example files
    NothingFound,

    /// The user confirmed an empty selection
    NothingSelected,

    /// The user aborted; `written` holds documents finished before that
    Cancelled { written: Vec<PathBuf> },
}

/// Resolved settings for one run
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub root: PathBuf,
    pub gitignore: bool,
    pub pattern: String,
    pub extra_ignore: Vec<String>,
    pub example_suffix: String,
}

impl PipelineOptions {
    /// Combine configuration with command-line overrides.
    ///
    /// `no_gitignore` wins over the configured `gitignore` setting.
    pub fn from_config(root: impl Into<PathBuf>, config: &Config, no_gitignore: bool) -> Self {
        Self {
            root: root.into(),
            gitignore: config.gitignore && !no_gitignore,
            pattern: config.pattern.clone(),
            extra_ignore: config.ignore.clone(),
            example_suffix: config.example_suffix.clone(),
        }
    }
}

/// Sequences one scaffolding run
pub struct Pipeline<'a> {
    options: PipelineOptions,
    prompter: &'a mut dyn Prompter,
    stage: Stage,
    history: Vec<Stage>,
    written: Vec<PathBuf>,
}

impl<'a> Pipeline<'a> {
    pub fn new(options: PipelineOptions, prompter: &'a mut dyn Prompter) -> Self {
        Self {
            options,
            prompter,
            stage: Stage::Discovering,
            history: vec![Stage::Discovering],
            written: Vec::new(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Every stage entered so far, in order
    pub fn history(&self) -> &[Stage] {
        &self.history
    }

    /// Run to completion, cancellation, or the first fatal error.
    ///
    /// Running a finished pipeline again starts a fresh run from `Discovering`.
    pub fn run(&mut self) -> Result<Outcome, PipelineError> {
        if self.stage.is_terminal() {
            debug!(stage = ?self.stage, "run: restarting finished pipeline");
            self.stage = Stage::Discovering;
            self.history = vec![Stage::Discovering];
            self.written.clear();
        }

        match self.run_stages() {
            Ok(outcome) => {
                if matches!(outcome, Outcome::Cancelled { .. }) {
                    self.advance(Stage::Failed);
                } else {
                    self.advance(Stage::Done);
                }
                info!(outcome = ?outcome, "Pipeline finished");
                Ok(outcome)
            }
            Err(e) => {
                self.advance(Stage::Failed);
                warn!(error = %e, written = self.written.len(), "Pipeline failed");
                Err(e)
            }
        }
    }

    fn advance(&mut self, next: Stage) {
        if self.stage == next {
            return;
        }
        debug_assert!(
            self.stage.can_advance_to(next),
            "invalid stage transition {:?} -> {:?}",
            self.stage,
            next
        );
        debug!(from = ?self.stage, to = ?next, "advance");
        self.stage = next;
        self.history.push(next);
    }

    fn run_stages(&mut self) -> Result<Outcome, PipelineError> {
        let root = self
            .options
            .root
            .canonicalize()
            .map_err(|source| DiscoveryError::RootUnreadable {
                path: self.options.root.clone(),
                source,
            })?;

        let found = self.discover(&root)?;
        if found.is_empty() {
            return Ok(Outcome::NothingFound);
        }

        self.advance(Stage::Selecting);
        let candidates: Vec<Candidate> = found
            .into_iter()
            .map(|path| Candidate {
                label: discovery::relative_label(&root, &path),
                path,
            })
            .collect();

        let selected = match self.prompter.select(&candidates)? {
            PromptOutcome::Answered(selected) => selected,
            PromptOutcome::Cancelled => return Ok(Outcome::Cancelled { written: Vec::new() }),
        };
        if selected.is_empty() {
            return Ok(Outcome::NothingSelected);
        }
        info!(selected = selected.len(), "Files selected");

        for path in selected {
            if !self.process(&root, &path)? {
                return Ok(Outcome::Cancelled {
                    written: self.written.clone(),
                });
            }
        }

        Ok(Outcome::Completed {
            written: self.written.clone(),
        })
    }

    fn discover(&mut self, root: &Path) -> Result<Vec<PathBuf>, PipelineError> {
        let mut rules = if self.options.gitignore {
            discovery::load_gitignore(root)?
        } else {
            debug!("discover: gitignore filtering disabled");
            IgnoreRules::none()
        };
        rules.extend(IgnoreRules::from_entries(
            self.options.extra_ignore.iter().map(String::as_str),
        )?);

        Ok(discovery::discover(root, &self.options.pattern, &rules)?)
    }

    /// Parse, edit, render, and write one document. Returns `false` on cancellation.
    fn process(&mut self, root: &Path, path: &Path) -> Result<bool, PipelineError> {
        self.advance(Stage::Parsing);
        let bytes = fs::read(path).map_err(|source| PipelineError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);
        if matches!(content, Cow::Owned(_)) {
            warn!(path = %path.display(), "process: invalid UTF-8 replaced");
        }
        let mut doc = FileDocument::parse(path, &content);
        debug!(path = %path.display(), lines = doc.lines.len(), "process: parsed");

        self.advance(Stage::Editing);
        let title = discovery::relative_label(root, path);
        match editor::edit(&mut doc, &title, &mut *self.prompter)? {
            EditOutcome::Cancelled => return Ok(false),
            EditOutcome::Skipped => println!("{} {} {}", "-".dimmed(), title, "(no variables)".dimmed()),
            EditOutcome::Edited { applied } => debug!(applied, "process: edited"),
        }

        self.advance(Stage::Rendering);
        let contents = doc.render();

        self.advance(Stage::Writing);
        let output = doc.output_path(&self.options.example_suffix);
        fs::write(&output, contents).map_err(|source| PipelineError::Write {
            path: output.clone(),
            source,
        })?;
        info!(from = %path.display(), to = %output.display(), "Wrote env file");
        println!("{} Wrote {}", "✓".green(), discovery::relative_label(root, &output).cyan());

        self.written.push(output);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_forward_transitions() {
        assert!(Stage::Discovering.can_advance_to(Stage::Selecting));
        assert!(Stage::Selecting.can_advance_to(Stage::Parsing));
        assert!(Stage::Parsing.can_advance_to(Stage::Editing));
        assert!(Stage::Editing.can_advance_to(Stage::Rendering));
        assert!(Stage::Rendering.can_advance_to(Stage::Writing));
        assert!(Stage::Writing.can_advance_to(Stage::Done));
        assert!(Stage::Writing.can_advance_to(Stage::Parsing));
        assert!(Stage::Discovering.can_advance_to(Stage::Done));
        assert!(Stage::Selecting.can_advance_to(Stage::Done));
    }

    #[test]
    fn test_stage_rejects_backwards_and_skips() {
        assert!(!Stage::Selecting.can_advance_to(Stage::Discovering));
        assert!(!Stage::Editing.can_advance_to(Stage::Parsing));
        assert!(!Stage::Parsing.can_advance_to(Stage::Writing));
        assert!(!Stage::Writing.can_advance_to(Stage::Selecting));
    }

    #[test]
    fn test_stage_terminal_states() {
        assert!(Stage::Done.is_terminal());
        assert!(Stage::Failed.is_terminal());
        assert!(!Stage::Writing.is_terminal());
        assert!(!Stage::Done.can_advance_to(Stage::Parsing));
        assert!(!Stage::Failed.can_advance_to(Stage::Done));
        assert!(Stage::Editing.can_advance_to(Stage::Failed));
    }

    #[test]
    fn test_options_no_gitignore_overrides_config() {
        let config = Config::default();
        assert!(PipelineOptions::from_config(".", &config, false).gitignore);
        assert!(!PipelineOptions::from_config(".", &config, true).gitignore);

        let config = Config {
            gitignore: false,
            ..Config::default()
        };
        assert!(!PipelineOptions::from_config(".", &config, false).gitignore);
    }
}
