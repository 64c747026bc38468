//! Rendering templates with the `copier` command.

use std::path::Path;

use crate::answers::Answers;
use crate::error::Result;
use crate::repo::CommandRunner;
use crate::shell::CommandLine;

use super::TemplateRenderer;

/// Flags passed to every copier run: trust template tasks, accept defaults
/// for questions we do not answer, overwrite without asking.
const COMMON_FLAGS: [&str; 3] = ["--trust", "--defaults", "--overwrite"];

/// Renders templates by running `copier`.
#[derive(Debug, Clone)]
pub struct CopierRenderer {
    program: String,
}

impl Default for CopierRenderer {
    fn default() -> Self {
        Self::new("copier")
    }
}

impl CopierRenderer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn with_data(command: CommandLine, answers: &Answers) -> CommandLine {
        answers
            .to_map()
            .into_iter()
            .fold(command, |cmd, (key, value)| {
                cmd.arg("--data").arg(format!("{}={}", key, value))
            })
    }

    /// `copier copy --trust --defaults --overwrite [--vcs-ref REF] --data k=v… SRC DST`
    pub fn copy_command(
        &self,
        src: &str,
        dst: &Path,
        answers: &Answers,
        vcs_ref: Option<&str>,
    ) -> CommandLine {
        let mut command = CommandLine::new(&self.program)
            .arg("copy")
            .args(COMMON_FLAGS);
        if let Some(reference) = vcs_ref {
            command = command.args(["--vcs-ref", reference]);
        }
        Self::with_data(command, answers)
            .arg(src)
            .arg(dst.display().to_string())
    }

    /// `copier update --trust --defaults --overwrite --data k=v… DST`
    pub fn update_command(&self, dst: &Path, answers: &Answers) -> CommandLine {
        let command = CommandLine::new(&self.program)
            .arg("update")
            .args(COMMON_FLAGS);
        Self::with_data(command, answers).arg(dst.display().to_string())
    }
}

impl TemplateRenderer for CopierRenderer {
    fn copy(
        &self,
        runner: &mut dyn CommandRunner,
        src: &str,
        dst: &Path,
        answers: &Answers,
        vcs_ref: Option<&str>,
    ) -> Result<()> {
        tracing::info!("Rendering {} into {}", src, dst.display());
        runner.run(&self.copy_command(src, dst, answers, vcs_ref), dst)?;
        Ok(())
    }

    fn update(&self, runner: &mut dyn CommandRunner, dst: &Path, answers: &Answers) -> Result<()> {
        tracing::info!("Updating {} from its template", dst.display());
        runner.run(&self.update_command(dst, answers), dst)?;
        Ok(())
    }
}
