//! Template rendering.
//!
//! Rendering itself is delegated to an external renderer; [`CopierRenderer`]
//! drives `copier` through a [`CommandRunner`].

pub mod copier;

use std::path::Path;

use crate::answers::Answers;
use crate::error::Result;
use crate::repo::CommandRunner;

pub use copier::CopierRenderer;

/// Renders a template into a project directory.
pub trait TemplateRenderer {
    /// Render `src` into the fresh directory `dst`, optionally at a git ref.
    fn copy(
        &self,
        runner: &mut dyn CommandRunner,
        src: &str,
        dst: &Path,
        answers: &Answers,
        vcs_ref: Option<&str>,
    ) -> Result<()>;

    /// Re-apply the project's template to an existing project in `dst`.
    fn update(&self, runner: &mut dyn CommandRunner, dst: &Path, answers: &Answers) -> Result<()>;
}

/// Whether `template` is a location to render from rather than a catalog name.
///
/// URLs, scp-style git remotes and existing paths count as locations.
pub fn is_locator(template: &str) -> bool {
    template.contains("://") || template.starts_with("git@") || Path::new(template).exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_locators() {
        assert!(is_locator("https://github.com/tschm/cradle_templates/paper"));
        assert!(is_locator("git@github.com:tschm/template.git"));
    }

    #[test]
    fn existing_paths_are_locators() {
        let temp = tempfile::TempDir::new().unwrap();
        assert!(is_locator(&temp.path().display().to_string()));
    }

    #[test]
    fn names_are_not_locators() {
        assert!(!is_locator("package"));
        assert!(!is_locator("definitely-not-a-template-dir"));
    }
}
