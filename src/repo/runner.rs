//! Running ordered external commands in a working directory.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{CradleError, Result};
use crate::shell::{execute_checked, CommandLine, CommandOptions, CommandResult};

/// Runs external commands on behalf of the template and repository steps.
pub trait CommandRunner {
    /// Run one command in `cwd`, failing with `CommandFailed` on a non-zero exit.
    fn run(&mut self, command: &CommandLine, cwd: &Path) -> Result<CommandResult>;

    /// Run commands in order, stopping at the first failure.
    fn run_all(&mut self, commands: &[CommandLine], cwd: &Path) -> Result<()> {
        for command in commands {
            self.run(command, cwd)?;
        }
        Ok(())
    }
}

/// Runs commands as real processes with captured output.
#[derive(Debug, Default)]
pub struct ShellRunner {
    env: HashMap<String, String>,
    echo: bool,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print each command before running it.
    pub fn echo_commands(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Add an environment variable for every command run.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }
}

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &CommandLine, cwd: &Path) -> Result<CommandResult> {
        tracing::debug!("Running `{}` in {}", command, cwd.display());
        if self.echo {
            eprintln!("  $ {}", command);
        }
        let mut options = CommandOptions::captured_in(cwd);
        options.env = self.env.clone();
        execute_checked(command, &options)
    }
}

/// Records commands instead of running them.
///
/// Used for `--dry-run`. Tests can script stdout per command and
/// mark commands as failing.
#[derive(Debug, Default)]
pub struct DryRunRunner {
    executed: Vec<(CommandLine, PathBuf)>,
    outputs: HashMap<String, String>,
    failures: HashSet<String>,
}

impl DryRunRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `stdout` when the command renders as `command`.
    pub fn respond(&mut self, command: &str, stdout: &str) {
        self.outputs.insert(command.to_string(), stdout.to_string());
    }

    /// Fail with exit code 1 when the command renders as `command`.
    pub fn fail_on(&mut self, command: &str) {
        self.failures.insert(command.to_string());
    }

    /// Commands seen so far, in order.
    pub fn commands(&self) -> Vec<&CommandLine> {
        self.executed.iter().map(|(c, _)| c).collect()
    }

    /// Commands seen so far, rendered as strings.
    pub fn command_lines(&self) -> Vec<String> {
        self.executed.iter().map(|(c, _)| c.to_string()).collect()
    }

    /// Working directory each command was run in.
    pub fn directories(&self) -> Vec<&Path> {
        self.executed.iter().map(|(_, d)| d.as_path()).collect()
    }
}

impl CommandRunner for DryRunRunner {
    fn run(&mut self, command: &CommandLine, cwd: &Path) -> Result<CommandResult> {
        let rendered = command.to_string();
        self.executed.push((command.clone(), cwd.to_path_buf()));

        if self.failures.contains(&rendered) {
            return Err(CradleError::CommandFailed {
                command: rendered,
                code: Some(1),
                stderr: "simulated failure".to_string(),
            });
        }

        let stdout = self.outputs.get(&rendered).cloned().unwrap_or_default();
        Ok(CommandResult::success(stdout, String::new(), Duration::ZERO))
    }
}
