//! Locating, creating, reading and writing the configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::CradleConfig;
use crate::error::{CradleError, Result};

/// Directory under the home directory holding cradle's configuration.
pub const CONFIG_DIR: &str = ".cradle";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yaml";

/// Default configuration path: `~/.cradle/config.yaml`.
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine the home directory"))?;
    Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Write the default catalog to `path` unless the file already exists.
///
/// Returns `true` when the file was created.
pub fn ensure_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    write_yaml(path, &CradleConfig::default())?;
    tracing::info!("Created default configuration at {}", path.display());
    Ok(true)
}

/// Parse YAML content into a [`CradleConfig`].
///
/// An empty document yields an empty catalog.
pub fn parse_config(content: &str, source_path: &Path) -> Result<CradleConfig> {
    if content.trim().is_empty() {
        return Ok(CradleConfig {
            templates: Default::default(),
            requirements: Default::default(),
        });
    }
    serde_yaml::from_str(content).map_err(|e| CradleError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read the configuration, creating the default file first if needed.
pub fn read_config(path: &Path) -> Result<CradleConfig> {
    ensure_config_file(path)?;
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Replace the configuration file with `config`.
pub fn write_config(path: &Path, config: &CradleConfig) -> Result<()> {
    ensure_config_file(path)?;
    write_yaml(path, config)
}

fn write_yaml(path: &Path, config: &CradleConfig) -> Result<()> {
    let yaml = serde_yaml::to_string(config).map_err(|e| CradleError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    fs::write(path, yaml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TemplateInfo;
    use tempfile::TempDir;

    #[test]
    fn default_path_is_under_home() {
        if let Ok(path) = default_config_path() {
            assert!(path.ends_with(".cradle/config.yaml"));
        }
    }

    #[test]
    fn ensure_creates_directory_and_default_catalog() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.yaml");

        assert!(ensure_config_file(&path).unwrap());
        assert!(!ensure_config_file(&path).unwrap());

        let config = read_config(&path).unwrap();
        assert_eq!(config, CradleConfig::default());
    }

    #[test]
    fn read_keeps_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(
            &path,
            "templates:\n  mine:\n    url: /tmp/template\n    description: Local\n",
        )
        .unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.templates.len(), 1);
        assert_eq!(config.template_info("mine").unwrap().url, "/tmp/template");
    }

    #[test]
    fn write_then_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");

        let mut config = CradleConfig::default();
        config.templates.insert(
            "slides".to_string(),
            TemplateInfo {
                url: "https://example.com/slides".to_string(),
                description: "Slides".to_string(),
            },
        );
        write_config(&path, &config).unwrap();

        let loaded = read_config(&path).unwrap();
        assert_eq!(loaded.templates.len(), 4);
        assert_eq!(loaded.template_info("slides").unwrap().description, "Slides");
    }

    #[test]
    fn invalid_yaml_is_config_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "templates: [unclosed").unwrap();

        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, CradleError::ConfigParseError { .. }));
    }

    #[test]
    fn empty_file_is_empty_catalog() {
        let config = parse_config("", Path::new("config.yaml")).unwrap();
        assert!(config.templates.is_empty());
    }
}
