//! Minimum version requirements.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{SemanticVersion, VersionError};

/// A lower bound that an installed version must meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionRequirement {
    major: u64,
    minor: u64,
    patch: Option<u64>,
}

impl VersionRequirement {
    pub fn new(major: u64, minor: u64, patch: Option<u64>) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> Option<u64> {
        self.patch
    }
}

impl fmt::Display for VersionRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

impl FromStr for VersionRequirement {
    type Err = VersionError;

    /// Parse `MAJOR.MINOR` or `MAJOR.MINOR.PATCH`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| VersionError::InvalidRequirement {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = s.trim().split('.').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(invalid("expected MAJOR.MINOR or MAJOR.MINOR.PATCH"));
        }

        let mut numbers = Vec::with_capacity(parts.len());
        for part in parts {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid("version components must be non-negative integers"));
            }
            let n = part
                .parse::<u64>()
                .map_err(|_| invalid("version component is out of range"))?;
            numbers.push(n);
        }

        Ok(Self::new(numbers[0], numbers[1], numbers.get(2).copied()))
    }
}

impl TryFrom<String> for VersionRequirement {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VersionRequirement> for String {
    fn from(value: VersionRequirement) -> Self {
        value.to_string()
    }
}

impl From<(u64, u64)> for VersionRequirement {
    fn from((major, minor): (u64, u64)) -> Self {
        Self::new(major, minor, None)
    }
}

impl From<(u64, u64, u64)> for VersionRequirement {
    fn from((major, minor, patch): (u64, u64, u64)) -> Self {
        Self::new(major, minor, Some(patch))
    }
}

impl From<&SemanticVersion> for VersionRequirement {
    fn from(version: &SemanticVersion) -> Self {
        Self::new(version.major(), version.minor(), version.patch())
    }
}

/// The forms a caller may supply a minimum in.
///
/// Resolved once into a [`VersionRequirement`] before any comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementSpec {
    /// Dotted string such as `"2.28.0"` or `"2.28"`.
    Text(String),
    /// `(major, minor)`.
    Pair(u64, u64),
    /// `(major, minor, patch)`.
    Triple(u64, u64, u64),
}

impl RequirementSpec {
    pub fn resolve(&self) -> Result<VersionRequirement, VersionError> {
        match self {
            Self::Text(s) => s.parse(),
            Self::Pair(major, minor) => Ok((*major, *minor).into()),
            Self::Triple(major, minor, patch) => Ok((*major, *minor, *patch).into()),
        }
    }
}

impl From<&str> for RequirementSpec {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RequirementSpec {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<(u64, u64)> for RequirementSpec {
    fn from((major, minor): (u64, u64)) -> Self {
        Self::Pair(major, minor)
    }
}

impl From<(u64, u64, u64)> for RequirementSpec {
    fn from((major, minor, patch): (u64, u64, u64)) -> Self {
        Self::Triple(major, minor, patch)
    }
}

impl TryFrom<RequirementSpec> for VersionRequirement {
    type Error = VersionError;

    fn try_from(spec: RequirementSpec) -> Result<Self, Self::Error> {
        spec.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_part_string() {
        let r: VersionRequirement = "2.28.0".parse().unwrap();
        assert_eq!((r.major(), r.minor(), r.patch()), (2, 28, Some(0)));
    }

    #[test]
    fn parses_two_part_string() {
        let r: VersionRequirement = "2.28".parse().unwrap();
        assert_eq!(r.patch(), None);
        assert_eq!(r.to_string(), "2.28");
    }

    #[test]
    fn rejects_single_component() {
        let err = "2".parse::<VersionRequirement>().unwrap_err();
        assert!(matches!(err, VersionError::InvalidRequirement { .. }));
    }

    #[test]
    fn rejects_too_many_components() {
        assert!("1.2.3.4".parse::<VersionRequirement>().is_err());
    }

    #[test]
    fn rejects_non_numeric_components() {
        for s in ["", "a.b", "2.x", "2..0", "2.28.", "+2.28", "2.-1"] {
            assert!(
                s.parse::<VersionRequirement>().is_err(),
                "expected '{}' to be rejected",
                s
            );
        }
    }

    #[test]
    fn tuples_convert() {
        assert_eq!(
            VersionRequirement::from((2, 28)),
            VersionRequirement::new(2, 28, None)
        );
        assert_eq!(
            VersionRequirement::from((2, 28, 1)),
            VersionRequirement::new(2, 28, Some(1))
        );
    }

    #[test]
    fn spec_resolves_each_form() {
        let expected = VersionRequirement::new(2, 28, Some(0));
        assert_eq!(RequirementSpec::from("2.28.0").resolve().unwrap(), expected);
        assert_eq!(RequirementSpec::from((2, 28, 0)).resolve().unwrap(), expected);
        assert_eq!(
            RequirementSpec::from((2, 28)).resolve().unwrap(),
            VersionRequirement::new(2, 28, None)
        );
    }

    #[test]
    fn spec_with_bad_text_fails_instead_of_defaulting() {
        let spec = RequirementSpec::from(String::from("latest"));
        let err = VersionRequirement::try_from(spec).unwrap_err();
        assert!(err.to_string().contains("latest"));
    }

    #[test]
    fn from_semantic_version_drops_vendor() {
        let v = SemanticVersion::new(2, 39, Some(5), Some("Apple Git-154".into()));
        assert_eq!(VersionRequirement::from(&v).to_string(), "2.39.5");
    }

    #[test]
    fn deserializes_from_string() {
        let r: VersionRequirement = serde_yaml::from_str("\"2.30.1\"").unwrap();
        assert_eq!(r, VersionRequirement::new(2, 30, Some(1)));
        assert!(serde_yaml::from_str::<VersionRequirement>("\"two\"").is_err());
    }

    #[test]
    fn serializes_to_string() {
        let r = VersionRequirement::new(2, 0, None);
        assert_eq!(serde_json::to_string(&r).unwrap(), "\"2.0\"");
    }
}
