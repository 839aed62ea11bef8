//! envscaffold - scaffold `.env` files from `.env.example` templates
//!
//! Finds example files under a project root, lets the user pick which to use,
//! prompts for every variable with the example value pre-filled, and writes the
//! resulting `.env` next to each example.
//!
//! # Pipeline
//!
//! ```text
//! discover ──► select ──► parse ──► edit ──► render ──► write
//!  (walkdir,    (Prompter)  (Line)   (Prompter) (String)  (.env)
//!   .gitignore)
//! ```
//!
//! # Example
//!
//! ```
//! use envscaffold::document::FileDocument;
//! use envscaffold::editor::{Answers, apply_answers};
//!
//! let mut doc = FileDocument::parse(".env.example", "# header\nA=1\n\nB=\n");
//! let answers: Answers = [(1, "10"), (3, "20")].into_iter().collect();
//! apply_answers(&mut doc, &answers);
//! assert_eq!(doc.render(), "# header\nA=10\n\nB=20\n");
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod document;
pub mod editor;
pub mod error;
pub mod pipeline;
pub mod prompt;

pub use config::Config;
pub use document::{FileDocument, Line, LineKind, Variable};
pub use editor::{Answers, EditOutcome, PromptSpec};
pub use error::{DiscoveryError, PipelineError, PromptError};
pub use pipeline::{Outcome, Pipeline, PipelineOptions, Stage};
pub use prompt::{Candidate, PromptOutcome, Prompter, TerminalPrompter};
