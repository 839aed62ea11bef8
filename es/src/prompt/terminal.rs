//! Terminal prompts backed by rustyline

use std::path::PathBuf;

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use super::{Candidate, PromptOutcome, Prompter};
use crate::editor::{Answers, PromptSpec};
use crate::error::PromptError;

/// One line typed at the selection prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionInput {
    /// Empty line: accept the current selection
    Confirm,
    All,
    None,
    /// Zero-based indices to flip
    Toggle(Vec<usize>),
}

/// Parse selection input. Numbers are one-based and may be separated by spaces or commas.
pub fn parse_selection_input(input: &str, count: usize) -> Result<SelectionInput, String> {
    let input = input.trim();
    match input {
        "" => return Ok(SelectionInput::Confirm),
        "a" | "all" => return Ok(SelectionInput::All),
        "n" | "none" => return Ok(SelectionInput::None),
        _ => {}
    }

    let mut indices = Vec::new();
    for token in input.split(|c: char| c == ',' || c.is_whitespace()).filter(|t| !t.is_empty()) {
        let number: usize = token.parse().map_err(|_| format!("Not a number: {}", token))?;
        if number == 0 || number > count {
            return Err(format!("No file numbered {} (1-{})", number, count));
        }
        indices.push(number - 1);
    }
    Ok(SelectionInput::Toggle(indices))
}

/// Interactive prompts on stdin/stdout
pub struct TerminalPrompter {
    editor: DefaultEditor,
}

impl TerminalPrompter {
    pub fn new() -> Result<Self, PromptError> {
        let editor = DefaultEditor::new()?;
        Ok(Self { editor })
    }

    fn print_choices(candidates: &[Candidate], selected: &[bool]) {
        for (idx, (candidate, on)) in candidates.iter().zip(selected).enumerate() {
            let mark = if *on { "[x]".green() } else { "[ ]".dimmed() };
            println!("  {} {:>2}. {}", mark, idx + 1, candidate.label);
        }
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, candidates: &[Candidate]) -> Result<PromptOutcome<Vec<PathBuf>>, PromptError> {
        let mut selected = vec![true; candidates.len()];

        println!("{}", "Select files to parse".bright_cyan().bold());
        println!(
            "{}",
            "Type numbers to toggle, 'a' for all, 'n' for none, Enter to confirm".dimmed()
        );

        loop {
            Self::print_choices(candidates, &selected);

            let line = match self.editor.readline(&format!("{} ", "?".bright_green())) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    debug!("select: cancelled");
                    return Ok(PromptOutcome::Cancelled);
                }
                Err(err) => return Err(err.into()),
            };

            match parse_selection_input(&line, candidates.len()) {
                Ok(SelectionInput::Confirm) => break,
                Ok(SelectionInput::All) => selected.iter_mut().for_each(|s| *s = true),
                Ok(SelectionInput::None) => selected.iter_mut().for_each(|s| *s = false),
                Ok(SelectionInput::Toggle(indices)) => {
                    for idx in indices {
                        selected[idx] = !selected[idx];
                    }
                }
                Err(msg) => println!("{} {}", "!".yellow(), msg),
            }
        }

        let paths: Vec<PathBuf> = candidates
            .iter()
            .zip(&selected)
            .filter(|(_, on)| **on)
            .map(|(candidate, _)| candidate.path.clone())
            .collect();
        debug!(selected = paths.len(), "select: confirmed");
        Ok(PromptOutcome::Answered(paths))
    }

    fn ask(&mut self, title: &str, prompts: &[PromptSpec]) -> Result<PromptOutcome<Answers>, PromptError> {
        println!("{}", title.bright_cyan().bold());

        let mut answers = Answers::new();
        for spec in prompts {
            let prompt = format!("{} {} ", spec.label.yellow(), "›".dimmed());
            let initial = spec.initial.as_deref().unwrap_or("");

            match self.editor.readline_with_initial(&prompt, (initial, "")) {
                Ok(value) => answers.insert(spec.id, value),
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    debug!(label = %spec.label, "ask: cancelled");
                    return Ok(PromptOutcome::Cancelled);
                }
                Err(err) => return Err(err.into()),
            }
        }

        Ok(PromptOutcome::Answered(answers))
    }
}
