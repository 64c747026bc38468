//! Configuration schema for `~/.cradle/config.yaml`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::version::VersionRequirement;

const TEMPLATE_BASE_URL: &str = "https://github.com/tschm/cradle_templates";

/// Root configuration: the template catalog and tool minimums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CradleConfig {
    /// Templates by name.
    #[serde(default)]
    pub templates: BTreeMap<String, TemplateInfo>,

    /// Minimum versions of the external tools.
    #[serde(default)]
    pub requirements: ToolRequirements,
}

impl Default for CradleConfig {
    /// The catalog written on first use.
    fn default() -> Self {
        let templates = [
            (
                "experiments",
                "Template for experimental projects with Marimo notebooks",
            ),
            (
                "package",
                "Template for Python packages with PyPI publishing support",
            ),
            ("paper", "Template for academic papers with LaTeX support"),
        ]
        .into_iter()
        .map(|(name, description)| {
            (
                name.to_string(),
                TemplateInfo {
                    url: format!("{}/{}", TEMPLATE_BASE_URL, name),
                    description: description.to_string(),
                },
            )
        })
        .collect();

        Self {
            templates,
            requirements: ToolRequirements::default(),
        }
    }
}

impl CradleConfig {
    /// Look up a template by name.
    pub fn template_info(&self, name: &str) -> Option<&TemplateInfo> {
        self.templates.get(name)
    }

    pub fn all_templates(&self) -> &BTreeMap<String, TemplateInfo> {
        &self.templates
    }
}

/// A named template in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateInfo {
    /// Git URL or local path handed to the renderer.
    pub url: String,

    #[serde(default)]
    pub description: String,
}

/// Minimum versions of `git` and `gh`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRequirements {
    /// `git init --initial-branch` needs 2.28.
    #[serde(default = "default_git")]
    pub git: VersionRequirement,

    #[serde(default = "default_gh")]
    pub gh: VersionRequirement,
}

impl Default for ToolRequirements {
    fn default() -> Self {
        Self {
            git: default_git(),
            gh: default_gh(),
        }
    }
}

fn default_git() -> VersionRequirement {
    VersionRequirement::from((2, 28, 0))
}

fn default_gh() -> VersionRequirement {
    VersionRequirement::from((2, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_three_templates() {
        let config = CradleConfig::default();
        let names: Vec<_> = config.all_templates().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["experiments", "package", "paper"]);
        assert_eq!(
            config.template_info("paper").unwrap().url,
            "https://github.com/tschm/cradle_templates/paper"
        );
    }

    #[test]
    fn default_requirements() {
        let reqs = ToolRequirements::default();
        assert_eq!(reqs.git.to_string(), "2.28.0");
        assert_eq!(reqs.gh.to_string(), "2.0");
    }

    #[test]
    fn missing_sections_use_field_defaults() {
        let config: CradleConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.templates.is_empty());
        assert_eq!(config.requirements, ToolRequirements::default());
    }

    #[test]
    fn parses_partial_requirements() {
        let yaml = r#"
templates:
  custom:
    url: git@github.com:me/custom.git
requirements:
  git: "2.40"
"#;
        let config: CradleConfig = serde_yaml::from_str(yaml).unwrap();
        let custom = config.template_info("custom").unwrap();
        assert_eq!(custom.url, "git@github.com:me/custom.git");
        assert!(custom.description.is_empty());
        assert_eq!(config.requirements.git.to_string(), "2.40");
        assert_eq!(config.requirements.gh.to_string(), "2.0");
    }

    #[test]
    fn unknown_template_is_none() {
        assert!(CradleConfig::default().template_info("nope").is_none());
    }
}
