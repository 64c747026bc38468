//! Initializing or updating the project repository and pushing it to GitHub.

use chrono::{DateTime, Local};
use std::path::Path;

use crate::answers::Answers;
use crate::error::Result;
use crate::shell::CommandLine;

use super::{CommandRunner, GitHubCli};

/// Branch used for a newly created project.
pub const INITIAL_BRANCH: &str = "main";

/// Whether the directory already holds a git repository.
pub fn is_git_repo(dir: &Path) -> bool {
    dir.join(".git").exists()
}

/// Branch name for an update made at `now`, e.g. `update-cradle-20240131-154500`.
pub fn update_branch_name(now: DateTime<Local>) -> String {
    format!("update-cradle-{}", now.format("%Y%m%d-%H%M%S"))
}

/// New repository or an update to an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupMode {
    Initial,
    Update,
}

impl SetupMode {
    pub fn commit_message(&self) -> &'static str {
        match self {
            Self::Initial => "Initial commit by cradle",
            Self::Update => "Update by cradle",
        }
    }
}

fn git<const N: usize>(args: [&str; N]) -> CommandLine {
    CommandLine::new("git").args(args)
}

/// The commands that publish a rendered project.
#[derive(Debug, Clone)]
pub struct RepositoryPlan {
    mode: SetupMode,
    branch: String,
    prepare: Vec<CommandLine>,
    remote: Option<CommandLine>,
    push: CommandLine,
}

impl RepositoryPlan {
    /// Plan for `mode`, pushing `branch`.
    pub fn new(mode: SetupMode, answers: &Answers, branch: &str) -> Self {
        Self::with_github(mode, answers, branch, &GitHubCli::default())
    }

    pub fn with_github(
        mode: SetupMode,
        answers: &Answers,
        branch: &str,
        github: &GitHubCli,
    ) -> Self {
        let mut prepare = vec![match mode {
            SetupMode::Initial => git(["init", format!("--initial-branch={}", branch).as_str()]),
            SetupMode::Update => git(["checkout", "-b", branch]),
        }];
        prepare.push(git(["add", "-A"]));
        prepare.push(git(["commit", "-m", mode.commit_message()]));

        let remote = match mode {
            SetupMode::Initial => {
                prepare.push(github.create_repo(
                    &answers.full_name(),
                    answers.status,
                    &answers.description,
                ));
                Some(git(["remote", "add", "origin", answers.ssh_uri().as_str()]))
            }
            SetupMode::Update => None,
        };

        Self {
            mode,
            branch: branch.to_string(),
            prepare,
            remote,
            push: git(["push", "origin", format!("{}:{}", branch, branch).as_str()]),
        }
    }

    /// Plan for `dir`: an update when it already holds a git repository.
    pub fn for_directory(dir: &Path, answers: &Answers, branch: &str) -> Self {
        let mode = if is_git_repo(dir) {
            SetupMode::Update
        } else {
            SetupMode::Initial
        };
        Self::new(mode, answers, branch)
    }

    pub fn mode(&self) -> SetupMode {
        self.mode
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Every command in execution order, assuming no `origin` remote exists yet.
    pub fn commands(&self) -> Vec<&CommandLine> {
        self.prepare
            .iter()
            .chain(self.remote.iter())
            .chain(std::iter::once(&self.push))
            .collect()
    }

    /// Run the plan in `dir`, stopping at the first failing command.
    pub fn execute(&self, runner: &mut dyn CommandRunner, dir: &Path) -> Result<()> {
        runner.run_all(&self.prepare, dir)?;

        if let Some(remote) = &self.remote {
            if has_origin(runner, dir)? {
                tracing::debug!("Remote origin already configured");
            } else {
                runner.run(remote, dir)?;
            }
        }

        runner.run(&self.push, dir)?;
        tracing::info!("Pushed {} to origin", self.branch);
        Ok(())
    }
}

fn has_origin(runner: &mut dyn CommandRunner, dir: &Path) -> Result<bool> {
    let output = runner.run(&git(["remote"]), dir)?;
    Ok(output.stdout.lines().any(|line| line.trim() == "origin"))
}

/// Commit the rendered project in `dir` and push `branch` to GitHub.
///
/// A directory without `.git` gets a fresh repository and a new GitHub
/// repository; an existing one gets a new branch.
pub fn setup_repository(
    runner: &mut dyn CommandRunner,
    dir: &Path,
    answers: &Answers,
    branch: &str,
) -> Result<RepositoryPlan> {
    let plan = RepositoryPlan::for_directory(dir, answers, branch);
    tracing::info!(
        "Setting up {} repository on branch {}",
        match plan.mode() {
            SetupMode::Initial => "a new",
            SetupMode::Update => "the existing",
        },
        branch
    );
    plan.execute(runner, dir)?;
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Visibility;
    use crate::error::CradleError;
    use crate::repo::DryRunRunner;
    use chrono::TimeZone;
    use std::fs;
    use tempfile::TempDir;

    fn answers() -> Answers {
        Answers {
            project_name: "demo".into(),
            username: "alice".into(),
            description: "A demo project".into(),
            page: "https://alice.github.io/demo".into(),
            status: Visibility::Private,
        }
    }

    #[test]
    fn update_branch_name_format() {
        let now = Local.with_ymd_and_hms(2024, 1, 31, 15, 45, 0).unwrap();
        assert_eq!(update_branch_name(now), "update-cradle-20240131-154500");
    }

    #[test]
    fn initial_setup_sequence() {
        let temp = TempDir::new().unwrap();
        let mut runner = DryRunRunner::new();

        let plan = setup_repository(&mut runner, temp.path(), &answers(), "main").unwrap();

        assert_eq!(plan.mode(), SetupMode::Initial);
        assert_eq!(
            runner.command_lines(),
            vec![
                "git init --initial-branch=main",
                "git add -A",
                "git commit -m 'Initial commit by cradle'",
                "gh repo create alice/demo --private --description 'A demo project'",
                "git remote",
                "git remote add origin git@github.com:alice/demo.git",
                "git push origin main:main",
            ]
        );
        assert!(runner.directories().iter().all(|d| *d == temp.path()));
    }

    #[test]
    fn existing_origin_is_not_added_again() {
        let temp = TempDir::new().unwrap();
        let mut runner = DryRunRunner::new();
        runner.respond("git remote", "upstream\norigin\n");

        setup_repository(&mut runner, temp.path(), &answers(), "main").unwrap();

        let lines = runner.command_lines();
        assert!(!lines.iter().any(|l| l.starts_with("git remote add")));
        assert_eq!(lines.last().unwrap(), "git push origin main:main");
    }

    #[test]
    fn update_setup_sequence() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        let mut runner = DryRunRunner::new();

        let branch = "update-cradle-20240131-154500";
        let plan = setup_repository(&mut runner, temp.path(), &answers(), branch).unwrap();

        assert_eq!(plan.mode(), SetupMode::Update);
        assert_eq!(
            runner.command_lines(),
            vec![
                "git checkout -b update-cradle-20240131-154500",
                "git add -A",
                "git commit -m 'Update by cradle'",
                "git push origin update-cradle-20240131-154500:update-cradle-20240131-154500",
            ]
        );
    }

    #[test]
    fn failure_stops_the_sequence() {
        let temp = TempDir::new().unwrap();
        let mut runner = DryRunRunner::new();
        runner.fail_on("gh repo create alice/demo --private --description 'A demo project'");

        let err = setup_repository(&mut runner, temp.path(), &answers(), "main").unwrap_err();

        assert!(matches!(err, CradleError::CommandFailed { .. }));
        assert_eq!(runner.commands().len(), 4);
    }

    #[test]
    fn plan_lists_commands_without_running() {
        let plan = RepositoryPlan::new(SetupMode::Initial, &answers(), "main");
        let commands = plan.commands();
        assert_eq!(commands.len(), 6);
        assert_eq!(plan.branch(), "main");
        assert_eq!(
            commands[4].to_string(),
            "git remote add origin git@github.com:alice/demo.git"
        );
    }

    #[test]
    fn is_git_repo_checks_dot_git() {
        let temp = TempDir::new().unwrap();
        assert!(!is_git_repo(temp.path()));
        fs::create_dir(temp.path().join(".git")).unwrap();
        assert!(is_git_repo(temp.path()));
    }
}
