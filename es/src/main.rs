//! envscaffold - create .env files from .env.example templates
//!
//! CLI entry point.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};
use colored::*;
use eyre::{Context, Result};
use tracing::info;

use envscaffold::cli::{Cli, Command};
use envscaffold::config::Config;
use envscaffold::pipeline::{Outcome, Pipeline, PipelineOptions};
use envscaffold::prompt::TerminalPrompter;

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("envscaffold")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Write to a log file so output never lands in the middle of a prompt
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("envscaffold.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!(
        "envscaffold loaded config: gitignore={}, pattern={}",
        config.gitignore, config.pattern
    );

    match cli.command {
        Some(Command::Examples { root, no_gitignore }) => cmd_examples(&config, &root, no_gitignore),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}

/// Create .env files from the example files under `root`
fn cmd_examples(config: &Config, root: &Path, no_gitignore: bool) -> Result<()> {
    let options = PipelineOptions::from_config(root, config, no_gitignore);
    let mut prompter = TerminalPrompter::new().context("Failed to initialize terminal prompts")?;

    let outcome = match Pipeline::new(options, &mut prompter).run() {
        Ok(outcome) => outcome,
        Err(e) => {
            let context = match e.path() {
                Some(path) => format!("Stopped at {}", path.display()),
                None => "Failed to scaffold env files".to_string(),
            };
            return Err(e).context(context);
        }
    };

    match outcome {
        Outcome::Completed { written } => {
            println!("{} Created {} env file(s)", "✓".green(), written.len());
        }
        Outcome::NothingFound => {
            println!("No .env.example files found in {}", root.display());
        }
        Outcome::NothingSelected => {
            println!("No files selected. Exiting...");
        }
        Outcome::Cancelled { written } => {
            info!(written = written.len(), "Cancelled by user");
        }
    }

    Ok(())
}
