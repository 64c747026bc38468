//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{CradleError, Result};

use super::{OutputMode, Prompt, PromptResult, SpinnerHandle, UserInterface};

/// Prefix for environment variables that answer prompts by key.
pub const PROMPT_ENV_PREFIX: &str = "CRADLE_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `CRADLE_PROMPT_<KEY>` environment variables,
/// falling back to the prompt's default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        let answer = self
            .env_overrides
            .get(&env_key)
            .or(prompt.default.as_ref())
            .cloned()
            .ok_or_else(|| CradleError::PromptUnavailable {
                key: prompt.key.clone(),
            })?;
        Ok(PromptResult(answer))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_progress() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner { mode: self.mode })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            println!("\n{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_progress() {
            println!("  {}", hint);
        }
    }

    fn show_details(&mut self, title: &str, rows: &[(&str, String)]) {
        if !self.mode.shows_progress() {
            return;
        }
        println!("\n{}", title);
        for (key, value) in rows {
            println!("  {}: {}", key, value);
        }
        println!();
    }
}

/// Spinner that prints its final status line instead of animating.
struct NoopSpinner {
    mode: OutputMode,
}

impl SpinnerHandle for NoopSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            println!("  ✓ {}", msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("  ✗ {}", msg);
    }
}
