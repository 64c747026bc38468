//! GitHub CLI (`gh`) invocations.

use crate::answers::Visibility;
use crate::shell::CommandLine;

/// Builds `gh` command lines.
#[derive(Debug, Clone)]
pub struct GitHubCli {
    program: String,
}

impl Default for GitHubCli {
    fn default() -> Self {
        Self::new("gh")
    }
}

impl GitHubCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// `gh repo create <name> --<visibility> [--description <desc>]`.
    ///
    /// Spaces in `name` become dashes. An empty description omits the flag.
    pub fn create_repo(
        &self,
        name: &str,
        visibility: Visibility,
        description: &str,
    ) -> CommandLine {
        let mut command = CommandLine::new(&self.program)
            .args(["repo", "create"])
            .arg(name.replace(' ', "-"))
            .arg(format!("--{}", visibility));

        if !description.trim().is_empty() {
            command = command.args(["--description", description]);
        }
        command
    }
}
