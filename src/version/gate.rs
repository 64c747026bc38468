//! Tool presence and minimum-version gate.

use std::fmt;

use crate::shell::{self, CommandLine, CommandOptions};

use super::{parse_version, SemanticVersion, VersionError, VersionRequirement};

/// Raw result of asking a tool for its version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutput {
    /// Captured standard output.
    pub stdout: String,
    /// Whether the tool exited successfully.
    pub success: bool,
    /// Exit code, if the process exited normally.
    pub exit_code: Option<i32>,
}

impl QueryOutput {
    /// A successful query that printed `stdout`.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            success: true,
            exit_code: Some(0),
        }
    }

    /// A query whose process exited with `code`.
    pub fn failed(code: i32) -> Self {
        Self {
            stdout: String::new(),
            success: false,
            exit_code: Some(code),
        }
    }
}

/// The tool could not be invoked at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionQueryError(pub String);

impl fmt::Display for VersionQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for VersionQueryError {}

/// Source of a tool's self-reported version text.
pub trait VersionQuery {
    /// Name of the tool, used in error messages.
    fn tool(&self) -> &str;

    /// Ask the tool for its version.
    fn query(&self) -> Result<QueryOutput, VersionQueryError>;
}

impl<T: VersionQuery + ?Sized> VersionQuery for &T {
    fn tool(&self) -> &str {
        (**self).tool()
    }

    fn query(&self) -> Result<QueryOutput, VersionQueryError> {
        (**self).query()
    }
}

impl<T: VersionQuery + ?Sized> VersionQuery for Box<T> {
    fn tool(&self) -> &str {
        (**self).tool()
    }

    fn query(&self) -> Result<QueryOutput, VersionQueryError> {
        (**self).query()
    }
}

/// Queries a program by running `<program> --version`.
#[derive(Debug, Clone)]
pub struct CommandVersionQuery {
    program: String,
}

impl CommandVersionQuery {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl VersionQuery for CommandVersionQuery {
    fn tool(&self) -> &str {
        &self.program
    }

    fn query(&self) -> Result<QueryOutput, VersionQueryError> {
        let command = CommandLine::new(&self.program).arg("--version");
        let options = CommandOptions {
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        };

        tracing::debug!("Querying version: {}", command);
        let result =
            shell::execute(&command, &options).map_err(|e| VersionQueryError(e.to_string()))?;

        Ok(QueryOutput {
            stdout: result.stdout,
            success: result.success,
            exit_code: result.exit_code,
        })
    }
}

/// Decides whether an installed tool meets a minimum version.
///
/// Each call queries the tool afresh; nothing is cached.
///
/// # Example
///
/// ```
/// use cradle::version::{QueryOutput, VersionGate, VersionQuery, VersionQueryError};
///
/// struct Fixed;
///
/// impl VersionQuery for Fixed {
///     fn tool(&self) -> &str {
///         "git"
///     }
///
///     fn query(&self) -> Result<QueryOutput, VersionQueryError> {
///         Ok(QueryOutput::ok("git version 2.34.1"))
///     }
/// }
///
/// let gate = VersionGate::new(Fixed);
/// assert!(gate.check_version(&"2.30.0".parse().unwrap()).unwrap());
/// ```
#[derive(Debug)]
pub struct VersionGate<Q> {
    query: Q,
}

impl VersionGate<CommandVersionQuery> {
    /// Gate a program found on PATH.
    pub fn for_program(program: impl Into<String>) -> Self {
        Self::new(CommandVersionQuery::new(program))
    }
}

impl<Q: VersionQuery> VersionGate<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    /// Name of the gated tool.
    pub fn tool(&self) -> &str {
        self.query.tool()
    }

    /// Query and parse the installed version.
    pub fn installed_version(&self) -> Result<SemanticVersion, VersionError> {
        let tool = self.query.tool();
        let output = self
            .query
            .query()
            .map_err(|e| VersionError::ToolNotFound {
                tool: tool.to_string(),
                reason: e.to_string(),
            })?;

        if !output.success {
            let reason = match output.exit_code {
                Some(code) => format!("`{} --version` exited with code {}", tool, code),
                None => format!("`{} --version` was terminated by a signal", tool),
            };
            return Err(VersionError::ToolNotFound {
                tool: tool.to_string(),
                reason,
            });
        }

        parse_version(&output.stdout)
    }

    /// Whether the installed version meets `minimum`.
    pub fn check_version(&self, minimum: &VersionRequirement) -> Result<bool, VersionError> {
        let installed = self.installed_version()?;
        tracing::debug!(
            "{} {} against minimum {}",
            self.tool(),
            installed,
            minimum
        );
        Ok(installed.meets(minimum))
    }

    /// Fail with [`VersionError::Insufficient`] unless the installed version meets `minimum`.
    ///
    /// Returns the installed version on success.
    pub fn assert_version(
        &self,
        minimum: &VersionRequirement,
    ) -> Result<SemanticVersion, VersionError> {
        let installed = self.installed_version()?;
        if !installed.meets(minimum) {
            return Err(VersionError::Insufficient {
                tool: self.tool().to_string(),
                installed,
                required: *minimum,
            });
        }
        tracing::info!("Using {} {}", self.tool(), installed);
        Ok(installed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Scripted {
        response: Result<QueryOutput, VersionQueryError>,
        calls: Cell<usize>,
    }

    impl Scripted {
        fn new(response: Result<QueryOutput, VersionQueryError>) -> Self {
            Self {
                response,
                calls: Cell::new(0),
            }
        }
    }

    impl VersionQuery for Scripted {
        fn tool(&self) -> &str {
            "tool"
        }

        fn query(&self) -> Result<QueryOutput, VersionQueryError> {
            self.calls.set(self.calls.get() + 1);
            self.response.clone()
        }
    }

    fn req(s: &str) -> VersionRequirement {
        s.parse().unwrap()
    }

    #[test]
    fn check_passes_for_newer_tool() {
        let gate = VersionGate::new(Scripted::new(Ok(QueryOutput::ok("tool version 2.34.1"))));
        assert!(gate.check_version(&req("2.30.0")).unwrap());
    }

    #[test]
    fn check_fails_for_older_tool() {
        let gate = VersionGate::new(Scripted::new(Ok(QueryOutput::ok("tool version 2.20.0"))));
        assert!(!gate.check_version(&req("3.0.0")).unwrap());
    }

    #[test]
    fn assert_returns_installed_version() {
        let gate = VersionGate::new(Scripted::new(Ok(QueryOutput::ok(
            "tool version 2.39.5 (Apple Tool-154)",
        ))));
        let v = gate.assert_version(&req("2.28")).unwrap();
        assert_eq!(v.vendor_info(), Some("Apple Tool-154"));
    }

    #[test]
    fn assert_raises_insufficient() {
        let gate = VersionGate::new(Scripted::new(Ok(QueryOutput::ok("tool version 2.20.0"))));
        let err = gate.assert_version(&req("3.0.0")).unwrap_err();
        match err {
            VersionError::Insufficient {
                tool,
                installed,
                required,
            } => {
                assert_eq!(tool, "tool");
                assert_eq!(installed.numeric(), "2.20.0");
                assert_eq!(required.to_string(), "3.0.0");
            }
            other => panic!("Expected Insufficient, got {:?}", other),
        }
    }

    #[test]
    fn nonzero_exit_is_tool_not_found() {
        let gate = VersionGate::new(Scripted::new(Ok(QueryOutput::failed(127))));
        let err = gate.check_version(&req("1.0")).unwrap_err();
        assert!(matches!(err, VersionError::ToolNotFound { .. }));
        assert!(err.to_string().contains("127"));
    }

    #[test]
    fn spawn_failure_is_tool_not_found() {
        let gate = VersionGate::new(Scripted::new(Err(VersionQueryError(
            "No such file or directory".into(),
        ))));
        let err = gate.assert_version(&req("1.0")).unwrap_err();
        assert!(matches!(err, VersionError::ToolNotFound { .. }));
    }

    #[test]
    fn failing_exit_never_parses_output() {
        let mut output = QueryOutput::failed(1);
        output.stdout = "garbage output".into();
        let gate = VersionGate::new(Scripted::new(Ok(output)));
        let err = gate.assert_version(&req("1.0")).unwrap_err();
        assert!(matches!(err, VersionError::ToolNotFound { .. }));
    }

    #[test]
    fn garbage_output_is_parse_error() {
        let gate = VersionGate::new(Scripted::new(Ok(QueryOutput::ok("garbage output"))));
        let err = gate.assert_version(&req("1.0")).unwrap_err();
        assert_eq!(
            err,
            VersionError::Parse {
                input: "garbage output".into()
            }
        );
    }

    #[test]
    fn each_check_queries_again() {
        let gate = VersionGate::new(Scripted::new(Ok(QueryOutput::ok("tool version 1.0.0"))));
        gate.check_version(&req("1.0")).unwrap();
        gate.check_version(&req("1.0")).unwrap();
        assert_eq!(gate.query.calls.get(), 2);
    }

    #[test]
    fn command_query_for_missing_program_is_tool_not_found() {
        let gate = VersionGate::for_program("cradle-definitely-not-installed-tool");
        let err = gate.check_version(&req("1.0")).unwrap_err();
        assert!(matches!(err, VersionError::ToolNotFound { .. }));
    }
}
