//! CLI argument parsing for envscaffold

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "es")]
#[command(
    author,
    version,
    about = "Scaffold .env files from .env.example templates",
    long_about = None,
    after_help = "Logs are written to: ~/.local/share/envscaffold/logs/envscaffold.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create .env files from .env.example files
    Examples {
        /// Project root to search
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Don't filter discovered files through the root .gitignore
        #[arg(long)]
        no_gitignore: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_examples_defaults() {
        let cli = Cli::try_parse_from(["es", "examples"]).unwrap();
        match cli.command {
            Some(Command::Examples { root, no_gitignore }) => {
                assert_eq!(root, PathBuf::from("."));
                assert!(!no_gitignore);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_examples_flags() {
        let cli = Cli::try_parse_from(["es", "-v", "examples", "--root", "/srv/app", "--no-gitignore"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Command::Examples { root, no_gitignore }) => {
                assert_eq!(root, PathBuf::from("/srv/app"));
                assert!(no_gitignore);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["es"]).unwrap();
        assert!(cli.command.is_none());
    }
}
