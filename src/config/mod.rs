//! Template catalog configuration.
//!
//! The catalog lives in `~/.cradle/config.yaml` and is created with the
//! default templates on first use.
//!
//! # Example
//!
//! ```
//! use cradle::config::read_config;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yaml");
//!
//! let config = read_config(&path).unwrap();
//! assert!(config.template_info("package").is_some());
//! assert!(path.exists());
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    default_config_path, ensure_config_file, parse_config, read_config, write_config, CONFIG_DIR,
    CONFIG_FILE,
};
pub use schema::{CradleConfig, TemplateInfo, ToolRequirements};
