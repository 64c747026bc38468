//! Contextual hints shown after a command finishes.

/// Hint after a new project was created and pushed.
pub fn after_create(ssh_uri: &str) -> String {
    format!("Clone your new repository with: git clone {}", ssh_uri)
}

/// Hint after an existing project was updated on a branch.
pub fn after_update(branch: &str) -> String {
    format!(
        "Open a pull request for `{}` to review the template changes.",
        branch
    )
}

/// Hint after a dry run.
pub fn after_dry_run() -> &'static str {
    "Nothing was executed. Re-run without --dry-run to create the project."
}

/// Hint when the template list is empty.
pub fn no_templates(config_path: &str) -> String {
    format!("Add templates to {} to get started.", config_path)
}
