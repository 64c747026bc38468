//! Git and GitHub setup for rendered projects.
//!
//! - [`CommandRunner`] runs ordered commands ([`ShellRunner`] for real,
//!   [`DryRunRunner`] to only record them)
//! - [`RepositoryPlan`] is the fixed git/gh sequence for a new or updated project
//! - [`GitHubCli`] builds `gh` invocations

pub mod github;
pub mod runner;
pub mod setup;

pub use github::GitHubCli;
pub use runner::{CommandRunner, DryRunRunner, ShellRunner};
pub use setup::{
    is_git_repo, setup_repository, update_branch_name, RepositoryPlan, SetupMode, INITIAL_BRANCH,
};
