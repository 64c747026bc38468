//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, CreateArgs};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config_path: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher reading the catalog from `config_path`.
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Get the catalog path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. Without a subcommand, `create` runs with its defaults.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Create(args)) => {
                let cmd = super::create::CreateCommand::new(&self.config_path, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Templates(args)) => {
                let cmd = super::templates::TemplatesCommand::new(&self.config_path, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd =
                    super::create::CreateCommand::new(&self.config_path, CreateArgs::default());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_keeps_config_path() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/tmp/cradle.yaml"));
        assert_eq!(dispatcher.config_path(), Path::new("/tmp/cradle.yaml"));
    }

    #[test]
    fn dispatches_templates() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.yaml");
        fs::write(
            &config,
            "templates:\n  notes:\n    url: https://example.com/notes\n    description: Notes\n",
        )
        .unwrap();

        let cli = Cli::parse_from(["cradle", "templates"]);
        let mut ui = MockUI::new();
        let result = CommandDispatcher::new(config).dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("notes"));
    }

    #[test]
    fn dispatches_check_with_invalid_minimum() {
        let cli = Cli::parse_from(["cradle", "check", "--min", "two"]);
        let mut ui = MockUI::new();
        let err = CommandDispatcher::new(PathBuf::from("unused.yaml"))
            .dispatch(&cli, &mut ui)
            .unwrap_err();

        assert!(err.to_string().contains("Invalid version requirement"));
    }
}
