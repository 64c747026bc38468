//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    prompt_user, should_use_colors, CradleTheme, NonInteractiveUI, OutputMode, ProgressSpinner,
    Prompt, PromptResult, SpinnerHandle, UserInterface,
};

/// UI for a person at a terminal: dialoguer prompts and indicatif spinners.
///
/// Regular output goes to stdout, errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: CradleTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: if should_use_colors() {
                CradleTheme::new()
            } else {
                CradleTheme::plain()
            },
            mode,
        }
    }

    fn line(&self, text: impl std::fmt::Display) {
        // Write errors on stdout are ignored.
        let _ = writeln!(&self.out, "{}", text);
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.line(msg);
    }

    fn success(&mut self, msg: &str) {
        self.line(self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        let _ = writeln!(&self.err, "{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        let _ = writeln!(&self.err, "{}", self.theme.format_error(msg));
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.out)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_progress() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            self.line(format!("\n{}\n", self.theme.format_header(title)));
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_progress() {
            self.line(format!("  {}", self.theme.hint.apply_to(hint)));
        }
    }

    fn show_details(&mut self, title: &str, rows: &[(&str, String)]) {
        if !self.mode.shows_progress() {
            return;
        }
        let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0) + 2;
        self.line(format!("\n{}", self.theme.highlight.apply_to(title)));
        for (key, value) in rows {
            self.line(self.theme.format_row(key, value, width));
        }
        self.line("");
    }
}

/// Pick the terminal UI when asked for interactivity and stdout is a TTY.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
