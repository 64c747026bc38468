//! Semantic versions reported by external tools.

use regex::{Captures, Regex};
use std::fmt;
use std::sync::LazyLock;

use super::{VersionError, VersionRequirement};

static FULL_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bversion\s+(\d+)\.(\d+)\.(\d+)(?:\s*\((.*?)\))?").expect("valid regex")
});

static SHORT_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bversion\s+(\d+)\.(\d+)(?:\s*\((.*?)\))?").expect("valid regex")
});

/// A version parsed from a tool's `--version` output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    major: u64,
    minor: u64,
    patch: Option<u64>,
    vendor_info: Option<String>,
}

impl SemanticVersion {
    /// Create a version from its components.
    pub fn new(major: u64, minor: u64, patch: Option<u64>, vendor_info: Option<String>) -> Self {
        Self {
            major,
            minor,
            patch,
            vendor_info,
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// Patch component, absent when the tool only reported `MAJOR.MINOR`.
    pub fn patch(&self) -> Option<u64> {
        self.patch
    }

    /// Free-form vendor annotation, e.g. `Apple Git-154`.
    pub fn vendor_info(&self) -> Option<&str> {
        self.vendor_info.as_deref()
    }

    /// The numeric part only, without vendor info.
    pub fn numeric(&self) -> String {
        match self.patch {
            Some(patch) => format!("{}.{}.{}", self.major, self.minor, patch),
            None => format!("{}.{}", self.major, self.minor),
        }
    }

    /// Whether this version satisfies `requirement`.
    ///
    /// Compares major, then minor, then patch. When either side has no
    /// patch component the requirement counts as satisfied once major and
    /// minor are equal: a missing patch never fails a check. Vendor info is
    /// ignored.
    pub fn meets(&self, requirement: &VersionRequirement) -> bool {
        if self.major != requirement.major() {
            return self.major > requirement.major();
        }
        if self.minor != requirement.minor() {
            return self.minor > requirement.minor();
        }
        match (self.patch, requirement.patch()) {
            (Some(installed), Some(required)) => installed >= required,
            _ => true,
        }
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.numeric())?;
        if let Some(vendor) = &self.vendor_info {
            write!(f, " ({})", vendor)?;
        }
        Ok(())
    }
}

/// Parse a tool's version report such as `git version 2.39.5 (Apple Git-154)`.
///
/// Accepts `version MAJOR.MINOR.PATCH` and falls back to `version MAJOR.MINOR`,
/// each optionally followed by a parenthesized vendor annotation.
pub fn parse_version(output: &str) -> Result<SemanticVersion, VersionError> {
    let text = output.trim();
    let parse_error = || VersionError::Parse {
        input: text.to_string(),
    };

    if let Some(caps) = FULL_VERSION.captures(text) {
        return Ok(SemanticVersion {
            major: number(&caps, 1).ok_or_else(parse_error)?,
            minor: number(&caps, 2).ok_or_else(parse_error)?,
            patch: Some(number(&caps, 3).ok_or_else(parse_error)?),
            vendor_info: caps.get(4).map(|m| m.as_str().to_string()),
        });
    }

    if let Some(caps) = SHORT_VERSION.captures(text) {
        return Ok(SemanticVersion {
            major: number(&caps, 1).ok_or_else(parse_error)?,
            minor: number(&caps, 2).ok_or_else(parse_error)?,
            patch: None,
            vendor_info: caps.get(3).map(|m| m.as_str().to_string()),
        });
    }

    Err(parse_error())
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u64> {
    caps.get(group)?.as_str().parse().ok()
}
