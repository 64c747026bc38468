//! Process execution and platform detection.

pub mod command;
pub mod platform;

pub use command::{execute, execute_checked, CommandLine, CommandOptions, CommandResult};
pub use platform::{is_ci, is_ci_with_env};
