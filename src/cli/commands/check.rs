//! Check command implementation.
//!
//! The `cradle check` command runs the version gate for one tool and
//! reports the installed version.

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::version::{
    SemanticVersion, VersionError, VersionGate, VersionQuery, VersionRequirement,
};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

/// Machine-readable outcome of a check.
#[derive(Debug, Serialize)]
struct CheckReport {
    tool: String,
    required: String,
    installed: Option<String>,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl CheckReport {
    fn new(
        tool: &str,
        required: &VersionRequirement,
        outcome: std::result::Result<SemanticVersion, VersionError>,
    ) -> Self {
        let (installed, error) = match outcome {
            Ok(installed) => (Some(installed.numeric()), None),
            Err(e) => {
                let installed = match &e {
                    VersionError::Insufficient { installed, .. } => Some(installed.numeric()),
                    _ => None,
                };
                (installed, Some(e.to_string()))
            }
        };

        Self {
            tool: tool.to_string(),
            required: required.to_string(),
            ok: error.is_none(),
            installed,
            error,
        }
    }
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Run the check against an explicit version source.
    pub fn check_with<Q: VersionQuery>(
        &self,
        gate: &VersionGate<Q>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let required: VersionRequirement = self.args.min.parse()?;

        if self.args.json {
            return self.report_json(gate, &required);
        }

        let installed = gate.assert_version(&required)?;
        ui.success(&format!(
            "{} {} meets the minimum {}",
            gate.tool(),
            installed,
            required
        ));
        Ok(CommandResult::success())
    }

    fn report_json<Q: VersionQuery>(
        &self,
        gate: &VersionGate<Q>,
        required: &VersionRequirement,
    ) -> Result<CommandResult> {
        let report = CheckReport::new(gate.tool(), required, gate.assert_version(required));

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| anyhow::anyhow!("Failed to serialize check report: {}", e))?;
        println!("{}", json);

        Ok(if report.ok {
            CommandResult::success()
        } else {
            CommandResult::failure(1)
        })
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let gate = VersionGate::for_program(self.args.tool.clone());
        self.check_with(&gate, ui)
    }
}
