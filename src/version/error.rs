//! Version gating failures.

use thiserror::Error;

use super::{SemanticVersion, VersionRequirement};

/// Why a version gate did not pass.
///
/// `ToolNotFound`, `Parse` and `Insufficient` are the caller-visible
/// failure kinds and each gets its own remediation advice.
/// `InvalidRequirement` signals a bad minimum supplied by the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VersionError {
    /// The tool could not be invoked or reported a failing exit status.
    #[error("{tool} is not installed or not available on PATH: {reason}")]
    ToolNotFound { tool: String, reason: String },

    /// The tool responded but its version text has no recognizable version.
    #[error("Unable to parse version from: {input}")]
    Parse { input: String },

    /// The tool is installed but older than required.
    #[error("Insufficient {tool} version: {installed} (required: >= {required})")]
    Insufficient {
        tool: String,
        installed: SemanticVersion,
        required: VersionRequirement,
    },

    /// The minimum version itself is malformed.
    #[error("Invalid version requirement '{input}': {reason}")]
    InvalidRequirement { input: String, reason: String },
}

impl VersionError {
    /// Advice for the operator, distinct per failure kind.
    pub fn remediation(&self) -> Option<String> {
        match self {
            Self::ToolNotFound { tool, .. } => {
                Some(format!("Install {} and make sure it is on your PATH.", tool))
            }
            Self::Parse { .. } => Some(
                "The installed build reports its version in an unsupported format.".to_string(),
            ),
            Self::Insufficient { tool, required, .. } => {
                Some(format!("Upgrade {} to version {} or newer.", tool, required))
            }
            Self::InvalidRequirement { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::parse_version;

    #[test]
    fn insufficient_message_names_both_versions() {
        let err = VersionError::Insufficient {
            tool: "git".into(),
            installed: parse_version("git version 2.20.0").unwrap(),
            required: VersionRequirement::new(3, 0, Some(0)),
        };
        let msg = err.to_string();
        assert!(msg.contains("2.20.0"));
        assert!(msg.contains(">= 3.0.0"));
    }

    #[test]
    fn remediation_differs_per_kind() {
        let missing = VersionError::ToolNotFound {
            tool: "gh".into(),
            reason: "No such file or directory".into(),
        };
        let unreadable = VersionError::Parse {
            input: "garbage output".into(),
        };
        let old = VersionError::Insufficient {
            tool: "gh".into(),
            installed: parse_version("gh version 1.9.2").unwrap(),
            required: VersionRequirement::new(2, 0, None),
        };

        let hints: Vec<String> = [missing, unreadable, old]
            .iter()
            .map(|e| e.remediation().unwrap())
            .collect();
        assert!(hints[0].starts_with("Install gh"));
        assert!(hints[1].contains("unsupported format"));
        assert!(hints[2].starts_with("Upgrade gh to version 2.0"));
    }

    #[test]
    fn invalid_requirement_has_no_remediation() {
        let err = VersionError::InvalidRequirement {
            input: "2".into(),
            reason: "expected MAJOR.MINOR[.PATCH]".into(),
        };
        assert!(err.remediation().is_none());
    }
}
