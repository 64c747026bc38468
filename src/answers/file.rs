//! The `.copier-answers.yml` file stored in rendered projects.

use serde_yaml::{Mapping, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{CradleError, Result};

use super::{Answers, Defaults};

/// File name of the answers file inside a project.
pub const ANSWERS_FILE: &str = ".copier-answers.yml";

/// Path of the answers file for a project directory.
pub fn answers_path(project_dir: &Path) -> PathBuf {
    project_dir.join(ANSWERS_FILE)
}

/// Read the mapping stored in `path`.
///
/// A missing or empty file yields an empty mapping.
fn read_mapping(path: &Path) -> Result<Mapping> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Mapping::new()),
        Err(e) => return Err(e.into()),
    };

    let value: Value =
        serde_yaml::from_str(&content).map_err(|e| CradleError::AnswersFileError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    match value {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(CradleError::AnswersFileError {
            path: path.to_path_buf(),
            message: "expected a mapping of answers".to_string(),
        }),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Load previous answers from a project directory to use as prompt defaults.
///
/// Non-scalar entries are skipped.
pub fn load_defaults(project_dir: &Path) -> Result<Defaults> {
    let path = answers_path(project_dir);
    let mapping = read_mapping(&path)?;

    let defaults: Defaults = mapping
        .iter()
        .filter_map(|(k, v)| Some((k.as_str()?.to_string(), scalar_to_string(v)?)))
        .collect();

    tracing::debug!("Loaded {} answers from {}", defaults.len(), path.display());
    Ok(defaults)
}

/// Merge `answers` into the project's answers file, creating it if needed.
///
/// Existing keys not produced by the questions are preserved.
pub fn append_answers(project_dir: &Path, answers: &Answers) -> Result<PathBuf> {
    let path = answers_path(project_dir);
    let mut mapping = read_mapping(&path)?;

    for (key, value) in answers.to_map() {
        mapping.insert(Value::String(key), Value::String(value));
    }

    let yaml = serde_yaml::to_string(&mapping).map_err(|e| CradleError::AnswersFileError {
        path: path.clone(),
        message: e.to_string(),
    })?;
    fs::write(&path, yaml)?;

    Ok(path)
}
