//! Error types for discovery, prompting, and the pipeline

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while locating example files
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Cannot read root directory {path}: {source}")]
    RootUnreadable { path: PathBuf, source: io::Error },

    #[error("Cannot read {path} (use --no-gitignore to skip ignore rules): {source}")]
    Gitignore { path: PathBuf, source: io::Error },

    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },
}

/// Failures of the interactive terminal, other than the user cancelling
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<rustyline::error::ReadlineError> for PromptError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        match err {
            rustyline::error::ReadlineError::Io(e) => PromptError::Io(e),
            other => PromptError::Terminal(other.to_string()),
        }
    }
}

/// Fatal pipeline errors; processing stops at the first one
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

impl PipelineError {
    /// The file the error concerns, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            PipelineError::Discovery(DiscoveryError::RootUnreadable { path, .. })
            | PipelineError::Discovery(DiscoveryError::Gitignore { path, .. })
            | PipelineError::Read { path, .. }
            | PipelineError::Write { path, .. } => Some(path),
            _ => None,
        }
    }
}
