//! Templates command implementation.
//!
//! The `cradle templates` command lists the template catalog.

use std::path::{Path, PathBuf};

use crate::cli::args::TemplatesArgs;
use crate::config::read_config;
use crate::error::Result;
use crate::ui::theme::CradleTheme;
use crate::ui::{hints, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The templates command implementation.
pub struct TemplatesCommand {
    config_path: PathBuf,
    args: TemplatesArgs,
}

impl TemplatesCommand {
    /// Create a new templates command.
    pub fn new(config_path: &Path, args: TemplatesArgs) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
            args,
        }
    }
}

impl Command for TemplatesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = read_config(&self.config_path)?;
        let templates = config.all_templates();

        if self.args.json {
            let json = serde_json::to_string_pretty(templates)
                .map_err(|e| anyhow::anyhow!("Failed to serialize templates: {}", e))?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        if templates.is_empty() {
            ui.warning("No templates configured.");
            ui.show_hint(&hints::no_templates(&self.config_path.display().to_string()));
            return Ok(CommandResult::success());
        }

        let theme = CradleTheme::new();
        let width = templates.keys().map(String::len).max().unwrap_or(0);

        ui.message(&format!("  {}", theme.key.apply_to("Templates:")));
        for (name, info) in templates {
            ui.message(&format!(
                "    {}  {}",
                theme.highlight.apply_to(format!("{:<width$}", name)),
                theme.dim.apply_to(&info.description)
            ));
            ui.message(&format!(
                "    {:<width$}  {}",
                "",
                theme.command.apply_to(&info.url)
            ));
        }

        Ok(CommandResult::success())
    }
}
