//! Error types for Cradle operations.
//!
//! This module defines [`CradleError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Version gating failures live in [`VersionError`] and are wrapped transparently
//! - Use `CradleError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CradleError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

use crate::version::VersionError;

/// Core error type for Cradle operations.
#[derive(Debug, Error)]
pub enum CradleError {
    /// A tool is missing, unreadable, or too old.
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Shell command exited with a failing status.
    #[error("Command failed with exit code {code:?}: {command}{}", format_stderr(.stderr))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Shell command could not be started at all.
    #[error("Could not run `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A prompt answer failed validation.
    #[error("Invalid {field}: {message}")]
    InvalidAnswer { field: String, message: String },

    /// A prompt has no answer in non-interactive mode.
    #[error("Cannot prompt for '{key}' in non-interactive mode (no default value)")]
    PromptUnavailable { key: String },

    /// Referenced template does not exist in the catalog.
    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    /// The template catalog is empty.
    #[error("No templates found in the catalog")]
    NoTemplates,

    /// Failed to parse the catalog configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Failed to read or write an answers file.
    #[error("Answers file {path}: {message}")]
    AnswersFileError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{}", trimmed)
    }
}

impl CradleError {
    /// Advice to show alongside the error, if any.
    pub fn remediation(&self) -> Option<String> {
        match self {
            Self::Version(e) => e.remediation(),
            Self::UnknownTemplate { .. } | Self::NoTemplates => {
                Some("Run `cradle templates` to see the configured templates.".to_string())
            }
            Self::PromptUnavailable { key } => Some(format!(
                "Set CRADLE_PROMPT_{} or run interactively.",
                key.to_uppercase()
            )),
            _ => None,
        }
    }
}

/// Result type alias for Cradle operations.
pub type Result<T> = std::result::Result<T, CradleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = CradleError::CommandFailed {
            command: "git push origin main:main".into(),
            code: Some(128),
            stderr: String::new(),
        };
        let msg = err.to_string();
        assert!(msg.contains("git push origin main:main"));
        assert!(msg.contains("128"));
        assert!(!msg.contains('\n'));
    }

    #[test]
    fn command_failed_appends_stderr() {
        let err = CradleError::CommandFailed {
            command: "gh repo create".into(),
            code: Some(1),
            stderr: "  HTTP 422: name already exists\n".into(),
        };
        assert!(err
            .to_string()
            .ends_with("\nHTTP 422: name already exists"));
    }

    #[test]
    fn invalid_answer_displays_field_and_message() {
        let err = CradleError::InvalidAnswer {
            field: "project name".into(),
            message: "must start with a lowercase letter".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("project name"));
        assert!(msg.contains("lowercase letter"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = CradleError::ConfigParseError {
            path: PathBuf::from("/home/u/.cradle/config.yaml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("config.yaml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn version_error_is_transparent() {
        let err: CradleError = VersionError::ToolNotFound {
            tool: "git".into(),
            reason: "not on PATH".into(),
        }
        .into();
        assert!(matches!(err, CradleError::Version(_)));
        assert!(err.to_string().contains("git"));
        assert!(err.remediation().is_some());
    }

    #[test]
    fn unknown_template_suggests_listing() {
        let err = CradleError::UnknownTemplate {
            name: "nope".into(),
        };
        assert!(err.remediation().unwrap().contains("cradle templates"));
    }

    #[test]
    fn prompt_unavailable_suggests_env_var() {
        let err = CradleError::PromptUnavailable {
            key: "project_name".into(),
        };
        assert!(err
            .remediation()
            .unwrap()
            .contains("CRADLE_PROMPT_PROJECT_NAME"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CradleError = io_err.into();
        assert!(matches!(err, CradleError::Io(_)));
        assert!(err.remediation().is_none());
    }
}
