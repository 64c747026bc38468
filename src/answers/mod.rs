//! Project answers: the questions asked before rendering a template.
//!
//! [`ask`] collects and validates an [`Answers`] value through a
//! [`UserInterface`](crate::ui::UserInterface). Previous answers stored in a
//! project's `.copier-answers.yml` are offered as defaults when updating.

pub mod file;
pub mod questions;

use std::collections::BTreeMap;

pub use file::{answers_path, append_answers, load_defaults, ANSWERS_FILE};
pub use questions::{
    ask, validate_description, validate_page, validate_project_name, validate_status,
    validate_username, Answers, Visibility,
};

/// Default values offered to the questions, keyed by answer name.
pub type Defaults = BTreeMap<String, String>;
