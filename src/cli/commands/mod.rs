//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Running `cradle` without a
//! subcommand is the same as `cradle create`.

pub mod check;
pub mod completions;
pub mod create;
pub mod dispatcher;
pub mod templates;

pub use create::{CreateCommand, CreateOutcome, Toolchain};
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
