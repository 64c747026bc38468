//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::CradleTheme;
use super::SpinnerHandle;

const TICKS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Spinner shown while `copier`, `git` or `gh` runs.
///
/// On finish the animated line is replaced by a themed status line.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: CradleTheme,
}

impl ProgressSpinner {
    pub fn new(message: &str, theme: CradleTheme) -> Self {
        let bar = ProgressBar::new_spinner().with_message(message.to_string());
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style.tick_chars(TICKS));
        }
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar, theme }
    }

    /// A spinner that draws nothing.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: CradleTheme::plain(),
        }
    }

    fn settle(&mut self, line: String) {
        if let Ok(style) = ProgressStyle::with_template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.settle(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.settle(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_spinner_settles_on_success() {
        let mut spinner = ProgressSpinner::hidden();
        spinner.finish_success("Template rendered");
        assert!(spinner.bar.is_finished());
        assert_eq!(spinner.bar.message(), "✓ Template rendered");
    }

    #[test]
    fn hidden_spinner_settles_on_error() {
        let mut spinner = ProgressSpinner::hidden();
        spinner.finish_error("Publishing repository failed");
        assert!(spinner.bar.is_finished());
        assert!(spinner.bar.message().contains("Publishing repository failed"));
    }
}
