//! Create command implementation.
//!
//! The `cradle create` command gates the required tools, asks the project
//! questions, renders the template and publishes the result to GitHub.
//! With `--dst` it updates an existing project on a new branch instead.

use chrono::Local;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::answers::{append_answers, ask, load_defaults, Answers, Defaults};
use crate::cli::args::CreateArgs;
use crate::config::{read_config, CradleConfig};
use crate::error::{CradleError, Result};
use crate::repo::{
    setup_repository, update_branch_name, CommandRunner, DryRunRunner, SetupMode, ShellRunner,
    INITIAL_BRANCH,
};
use crate::template::{is_locator, CopierRenderer, TemplateRenderer};
use crate::ui::{hints, Prompt, PromptOption, UserInterface};
use crate::version::{CommandVersionQuery, VersionGate, VersionQuery, VersionRequirement};

use super::dispatcher::{Command, CommandResult};

/// External tools used by `create`.
pub struct Toolchain<'a> {
    pub git: &'a dyn VersionQuery,
    pub gh: &'a dyn VersionQuery,
    pub renderer: &'a dyn TemplateRenderer,
}

/// What a completed `create` run did.
#[derive(Debug)]
pub struct CreateOutcome {
    pub answers: Answers,
    pub mode: SetupMode,
    pub branch: String,
    /// Directory the project was rendered into.
    pub project_dir: PathBuf,
    /// Temporary directory of a new project, removed on drop.
    pub workspace: Option<TempDir>,
}

/// The create command implementation.
pub struct CreateCommand {
    config_path: PathBuf,
    args: CreateArgs,
}

impl CreateCommand {
    /// Create a new create command.
    pub fn new(config_path: &Path, args: CreateArgs) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CreateArgs {
        &self.args
    }

    /// Run the whole flow with explicit collaborators.
    pub fn run(
        &self,
        ui: &mut dyn UserInterface,
        tools: &Toolchain<'_>,
        runner: &mut dyn CommandRunner,
    ) -> Result<CreateOutcome> {
        let config = read_config(&self.config_path)?;

        ui.show_header("cradle");
        gate(ui, tools.git, &config.requirements.git)?;
        gate(ui, tools.gh, &config.requirements.gh)?;

        match &self.args.dst {
            Some(dst) => self.update_project(ui, tools, runner, dst),
            None => self.create_project(ui, tools, runner, &config),
        }
    }

    fn create_project(
        &self,
        ui: &mut dyn UserInterface,
        tools: &Toolchain<'_>,
        runner: &mut dyn CommandRunner,
        config: &CradleConfig,
    ) -> Result<CreateOutcome> {
        let template = resolve_template(ui, config, self.args.template.as_deref())?;

        let workspace = tempfile::Builder::new().prefix("cradle-").tempdir()?;
        let project_dir = workspace.path().to_path_buf();
        tracing::info!("No destination given, rendering into {}", project_dir.display());

        let answers = ask(ui, &Defaults::new())?;

        with_spinner(ui, "Rendering template", "Template rendered", |_| {
            tools.renderer.copy(
                runner,
                &template,
                &project_dir,
                &answers,
                self.args.vcs_ref.as_deref(),
            )
        })?;
        append_answers(&project_dir, &answers)?;

        with_spinner(ui, "Publishing repository", "Repository published", |_| {
            setup_repository(runner, &project_dir, &answers, INITIAL_BRANCH).map(|_| ())
        })?;

        Ok(CreateOutcome {
            answers,
            mode: SetupMode::Initial,
            branch: INITIAL_BRANCH.to_string(),
            project_dir,
            workspace: Some(workspace),
        })
    }

    fn update_project(
        &self,
        ui: &mut dyn UserInterface,
        tools: &Toolchain<'_>,
        runner: &mut dyn CommandRunner,
        dst: &Path,
    ) -> Result<CreateOutcome> {
        if !dst.is_dir() {
            return Err(anyhow::anyhow!("Destination {} is not a directory", dst.display()).into());
        }
        tracing::info!("Updating the project in {}", dst.display());

        let defaults = load_defaults(dst)?;
        let answers = ask(ui, &defaults)?;

        with_spinner(ui, "Updating from template", "Template applied", |_| {
            tools.renderer.update(runner, dst, &answers)
        })?;

        let branch = update_branch_name(Local::now());
        let plan = with_spinner(ui, "Pushing update branch", "Update branch pushed", |_| {
            setup_repository(runner, dst, &answers, &branch)
        })?;

        Ok(CreateOutcome {
            answers,
            mode: plan.mode(),
            branch,
            project_dir: dst.to_path_buf(),
            workspace: None,
        })
    }

    /// Run against a [`DryRunRunner`] and list the commands it recorded.
    ///
    /// Tools are still gated and the questions still asked.
    pub fn preview(
        &self,
        ui: &mut dyn UserInterface,
        tools: &Toolchain<'_>,
    ) -> Result<Vec<String>> {
        let mut runner = DryRunRunner::new();
        self.run(ui, tools, &mut runner)?;

        let lines = runner.command_lines();
        ui.show_header("Commands that would run");
        for line in &lines {
            ui.message(&format!("  {}", line));
        }
        ui.show_hint(hints::after_dry_run());
        Ok(lines)
    }

    fn finish(&self, ui: &mut dyn UserInterface, outcome: CreateOutcome) -> Result<()> {
        match outcome.mode {
            SetupMode::Initial => {
                ui.success(&format!("Created {}", outcome.answers.repository_url()));
            }
            SetupMode::Update => {
                ui.success(&format!("Pushed branch {}", outcome.branch));
            }
        }

        if let Some(workspace) = outcome.workspace {
            if self.args.keep {
                let kept = workspace.keep();
                ui.message(&format!("Kept project directory at {}", kept.display()));
            }
        }

        match outcome.mode {
            SetupMode::Initial => ui.show_hint(&hints::after_create(&outcome.answers.ssh_uri())),
            SetupMode::Update => ui.show_hint(&hints::after_update(&outcome.branch)),
        }
        Ok(())
    }
}

impl Command for CreateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let git = CommandVersionQuery::new("git");
        let gh = CommandVersionQuery::new("gh");
        let renderer = CopierRenderer::default();
        let tools = Toolchain {
            git: &git,
            gh: &gh,
            renderer: &renderer,
        };

        if self.args.dry_run {
            self.preview(ui, &tools)?;
            return Ok(CommandResult::success());
        }

        let mut runner =
            ShellRunner::new().echo_commands(ui.output_mode().echoes_commands());
        let outcome = self.run(ui, &tools, &mut runner)?;
        self.finish(ui, outcome)?;
        Ok(CommandResult::success())
    }
}

fn gate(
    ui: &mut dyn UserInterface,
    query: &dyn VersionQuery,
    minimum: &VersionRequirement,
) -> Result<()> {
    let installed = VersionGate::new(query).assert_version(minimum)?;
    ui.message(&format!("Using {} {}", query.tool(), installed));
    Ok(())
}

/// Map `--template` to something the renderer can fetch.
///
/// Catalog names win over locators. Without a value the user picks from
/// the catalog.
pub fn resolve_template(
    ui: &mut dyn UserInterface,
    config: &CradleConfig,
    requested: Option<&str>,
) -> Result<String> {
    if let Some(name) = requested {
        if let Some(info) = config.template_info(name) {
            return Ok(info.url.clone());
        }
        if is_locator(name) {
            let path = Path::new(name);
            if path.exists() {
                return Ok(path.canonicalize()?.display().to_string());
            }
            return Ok(name.to_string());
        }
        return Err(CradleError::UnknownTemplate {
            name: name.to_string(),
        });
    }

    let templates = config.all_templates();
    if templates.is_empty() {
        return Err(CradleError::NoTemplates);
    }

    let options = templates
        .iter()
        .map(|(name, info)| {
            let label = if info.description.is_empty() {
                name.clone()
            } else {
                format!("{} - {}", name, info.description)
            };
            PromptOption::new(label, info.url.clone())
        })
        .collect::<Vec<_>>();
    let default = options.first().map(|o| o.value.clone());

    let choice = ui
        .prompt(&Prompt::select(
            "template",
            "What kind of project do you want to create?",
            options,
            default,
        ))?
        .as_string();
    Ok(choice)
}

/// Run `f` behind a spinner, finishing it according to the outcome.
fn with_spinner<T>(
    ui: &mut dyn UserInterface,
    message: &str,
    done: &str,
    f: impl FnOnce(&mut dyn UserInterface) -> Result<T>,
) -> Result<T> {
    let mut spinner = ui.start_spinner(message);
    match f(ui) {
        Ok(value) => {
            spinner.finish_success(done);
            Ok(value)
        }
        Err(e) => {
            spinner.finish_error(&format!("{} failed", message));
            Err(e)
        }
    }
}
