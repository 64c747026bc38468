//! Tool version gating.
//!
//! Turns "is the installed tool new enough" into a pass/fail decision with
//! a typed failure reason: the tool is missing, its version output is
//! unreadable, or it is older than required.
//!
//! # Modules
//!
//! - [`semver`] - [`SemanticVersion`] and the `--version` output parser
//! - [`requirement`] - [`VersionRequirement`] and its boundary input forms
//! - [`gate`] - [`VersionGate`] over a [`VersionQuery`] collaborator
//! - [`error`] - [`VersionError`] failure kinds
//!
//! # Example
//!
//! ```
//! use cradle::version::{parse_version, VersionRequirement};
//!
//! let installed = parse_version("git version 2.39.5 (Apple Git-154)").unwrap();
//! let minimum: VersionRequirement = "2.28.0".parse().unwrap();
//! assert!(installed.meets(&minimum));
//! assert_eq!(installed.vendor_info(), Some("Apple Git-154"));
//! ```

pub mod error;
pub mod gate;
pub mod requirement;
pub mod semver;

pub use error::VersionError;
pub use gate::{CommandVersionQuery, QueryOutput, VersionGate, VersionQuery, VersionQueryError};
pub use requirement::{RequirementSpec, VersionRequirement};
pub use semver::{parse_version, SemanticVersion};
