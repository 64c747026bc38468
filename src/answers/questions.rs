//! Project questions and their validation.

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{CradleError, Result};
use crate::ui::{Prompt, PromptOption, UserInterface};

use super::Defaults;

static PROJECT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*(?:[-_][a-z0-9]+)*$").expect("valid project name regex")
});

/// Visibility of the hosted repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Internal,
}

impl Visibility {
    pub const ALL: [Visibility; 3] = [Self::Public, Self::Private, Self::Internal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = CradleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| invalid("status", "must be one of: public, private, internal."))
    }
}

/// Validated answers describing the project to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub project_name: String,
    pub username: String,
    pub description: String,
    pub page: String,
    pub status: Visibility,
}

impl Answers {
    /// `owner/name` on GitHub.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.username, self.project_name)
    }

    pub fn repository_url(&self) -> String {
        format!("https://github.com/{}", self.full_name())
    }

    pub fn ssh_uri(&self) -> String {
        format!("git@github.com:{}.git", self.full_name())
    }

    /// The `gh` invocation that creates the repository, as a user would type it.
    pub fn gh_create(&self) -> String {
        format!(
            "gh repo create {} --{} --description '{}'",
            self.full_name(),
            self.status,
            self.description
        )
    }

    /// Flat key-value view handed to the template renderer and the answers file.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        [
            ("project_name", self.project_name.clone()),
            ("username", self.username.clone()),
            ("description", self.description.clone()),
            ("status", self.status.to_string()),
            ("page", self.page.clone()),
            ("ssh_uri", self.ssh_uri()),
            ("repository", self.repository_url()),
            ("gh_create", self.gh_create()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    /// Labelled rows shown to the user after the questions.
    pub fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Project name", self.project_name.clone()),
            ("GitHub username", self.username.clone()),
            ("Description", self.description.clone()),
            ("Visibility", self.status.to_string()),
            ("Repository URL", self.repository_url()),
            ("Companion page", self.page.clone()),
            ("SSH URI", self.ssh_uri()),
            ("Create command", self.gh_create()),
        ]
    }
}

fn invalid(field: &str, message: &str) -> CradleError {
    CradleError::InvalidAnswer {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn non_empty(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid(field, "cannot be empty."));
    }
    Ok(trimmed.to_string())
}

/// Normalize and validate a project name.
///
/// The name is trimmed and lowercased first, so `" MyProj "` becomes `myproj`.
pub fn validate_project_name(value: &str) -> Result<String> {
    let name = value.trim().to_lowercase();
    if PROJECT_NAME.is_match(&name) {
        Ok(name)
    } else {
        Err(invalid(
            "project name",
            "must start with a lowercase letter, followed by letters, digits, dashes, or underscores. \
             It cannot start or end with '-' or '_'.",
        ))
    }
}

pub fn validate_username(value: &str) -> Result<String> {
    non_empty("username", value)
}

pub fn validate_description(value: &str) -> Result<String> {
    non_empty("description", value)
}

pub fn validate_page(value: &str) -> Result<String> {
    non_empty("page", value)
}

pub fn validate_status(value: &str) -> Result<Visibility> {
    value.parse()
}

fn default_for(defaults: &Defaults, key: &str) -> Option<String> {
    defaults.get(key).filter(|v| !v.is_empty()).cloned()
}

/// Ask the project questions, validate each answer and show the resulting details.
pub fn ask(ui: &mut dyn UserInterface, defaults: &Defaults) -> Result<Answers> {
    let project_name = ui
        .prompt(&Prompt::input(
            "project_name",
            "Enter your project name:",
            default_for(defaults, "project_name"),
        ))?
        .as_string();
    let project_name = validate_project_name(&project_name)?;

    let username = ui
        .prompt(&Prompt::input(
            "username",
            "Enter your GitHub username (e.g. 'tschm' or 'cvxgrp'):",
            default_for(defaults, "username"),
        ))?
        .as_string();
    let username = validate_username(&username)?;

    let description = ui
        .prompt(&Prompt::input(
            "description",
            "Enter a brief description of your project:",
            default_for(defaults, "description"),
        ))?
        .as_string();
    let description = validate_description(&description)?;

    let page_default = default_for(defaults, "page")
        .unwrap_or_else(|| format!("https://{}.github.io/{}", username, project_name));
    let page = ui
        .prompt(&Prompt::input("page", "Companion website:", Some(page_default)))?
        .as_string();
    let page = validate_page(&page)?;

    let options = Visibility::ALL
        .iter()
        .map(|v| PromptOption::new(v.as_str(), v.as_str()))
        .collect();
    let status_default =
        default_for(defaults, "status").unwrap_or_else(|| Visibility::Public.to_string());
    let status = ui
        .prompt(&Prompt::select(
            "status",
            "What is the visibility status of the repository?",
            options,
            Some(status_default),
        ))?
        .as_string();
    let status = validate_status(&status)?;

    let answers = Answers {
        project_name,
        username,
        description,
        page,
        status,
    };

    ui.show_details("Repository details", &answers.detail_rows());
    tracing::info!("Repository details collected for {}", answers.full_name());

    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn sample() -> Answers {
        Answers {
            project_name: "demo".into(),
            username: "alice".into(),
            description: "A demo project".into(),
            page: "https://alice.github.io/demo".into(),
            status: Visibility::Private,
        }
    }

    fn answered_ui() -> MockUI {
        let mut ui = MockUI::new();
        ui.set_prompt_response("project_name", "Demo");
        ui.set_prompt_response("username", "alice");
        ui.set_prompt_response("description", "A demo project");
        ui
    }

    #[test]
    fn project_name_is_normalized() {
        assert_eq!(validate_project_name("  MyProj ").unwrap(), "myproj");
        assert_eq!(validate_project_name("my-proj_2").unwrap(), "my-proj_2");
    }

    #[test]
    fn project_name_rejects_bad_shapes() {
        for name in ["", "1proj", "-proj", "proj-", "my--proj", "my proj", "proj_"] {
            assert!(
                matches!(
                    validate_project_name(name),
                    Err(CradleError::InvalidAnswer { .. })
                ),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn text_fields_are_trimmed_and_required() {
        assert_eq!(validate_username(" alice ").unwrap(), "alice");
        assert!(validate_username("   ").is_err());
        assert!(validate_description("").is_err());
        assert!(validate_page("").is_err());
    }

    #[test]
    fn status_is_lowercase_exact() {
        assert_eq!(validate_status("public").unwrap(), Visibility::Public);
        assert_eq!(validate_status("internal").unwrap(), Visibility::Internal);
        assert!(validate_status("PUBLIC").is_err());
        assert!(validate_status("Private").is_err());
        assert!(validate_status("secret").is_err());
    }

    #[test]
    fn derived_values() {
        let answers = sample();
        assert_eq!(answers.full_name(), "alice/demo");
        assert_eq!(answers.repository_url(), "https://github.com/alice/demo");
        assert_eq!(answers.ssh_uri(), "git@github.com:alice/demo.git");
        assert_eq!(
            answers.gh_create(),
            "gh repo create alice/demo --private --description 'A demo project'"
        );
    }

    #[test]
    fn map_has_every_key() {
        let map = sample().to_map();
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "description",
                "gh_create",
                "page",
                "project_name",
                "repository",
                "ssh_uri",
                "status",
                "username"
            ]
        );
        assert_eq!(map["status"], "private");
    }

    #[test]
    fn ask_collects_and_validates() {
        let mut ui = answered_ui();
        let answers = ask(&mut ui, &Defaults::new()).unwrap();

        assert_eq!(answers.project_name, "demo");
        assert_eq!(answers.page, "https://alice.github.io/demo");
        assert_eq!(answers.status, Visibility::Public);
        assert_eq!(
            ui.prompt_keys(),
            vec!["project_name", "username", "description", "page", "status"]
        );
        assert!(ui.has_detail("SSH URI", "git@github.com:alice/demo.git"));
    }

    #[test]
    fn ask_offers_existing_answers_as_defaults() {
        let mut ui = MockUI::new();
        let defaults: Defaults = [
            ("project_name", "legacy"),
            ("username", "bob"),
            ("description", "Old description"),
            ("page", "https://example.org"),
            ("status", "internal"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let answers = ask(&mut ui, &defaults).unwrap();

        assert_eq!(answers.full_name(), "bob/legacy");
        assert_eq!(answers.page, "https://example.org");
        assert_eq!(answers.status, Visibility::Internal);
    }

    #[test]
    fn ask_rejects_invalid_project_name() {
        let mut ui = answered_ui();
        ui.set_prompt_response("project_name", "_bad");

        let err = ask(&mut ui, &Defaults::new()).unwrap_err();
        assert!(matches!(err, CradleError::InvalidAnswer { ref field, .. } if field == "project name"));
        assert_eq!(ui.prompt_keys(), vec!["project_name"]);
    }

    #[test]
    fn ask_rejects_empty_description() {
        let mut ui = answered_ui();
        ui.set_prompt_response("description", "  ");

        assert!(ask(&mut ui, &Defaults::new()).is_err());
    }

    #[test]
    fn status_prompt_defaults_to_public() {
        let mut ui = answered_ui();
        ask(&mut ui, &Defaults::new()).unwrap();

        let prompt = ui.prompt_for("status").unwrap();
        assert_eq!(prompt.default.as_deref(), Some("public"));
    }
}
