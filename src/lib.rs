//! Cradle - create GitHub projects from templates.
//!
//! Cradle asks a few questions about a new project, renders a `copier`
//! template with the answers, initializes a git repository and pushes it
//! to a freshly created GitHub repository. Existing projects can be
//! updated from their template on a new branch.
//!
//! # Modules
//!
//! - [`answers`] - Project questions, validation, and the answers file
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Template catalog configuration
//! - [`error`] - Error types and result aliases
//! - [`repo`] - Git and GitHub repository setup
//! - [`shell`] - Process execution
//! - [`template`] - Template rendering
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//! - [`version`] - Tool version parsing and gating
//!
//! # Example
//!
//! ```
//! use cradle::answers::{validate_project_name, Answers, Visibility};
//!
//! let name = validate_project_name("  My-Project ").unwrap();
//! assert_eq!(name, "my-project");
//!
//! let answers = Answers {
//!     project_name: name,
//!     username: "octocat".to_string(),
//!     description: "A demo".to_string(),
//!     page: "https://octocat.github.io/my-project".to_string(),
//!     status: Visibility::Private,
//! };
//! assert_eq!(answers.ssh_uri(), "git@github.com:octocat/my-project.git");
//! ```

pub mod answers;
pub mod cli;
pub mod config;
pub mod error;
pub mod repo;
pub mod shell;
pub mod template;
pub mod ui;
pub mod version;

pub use error::{CradleError, Result};
