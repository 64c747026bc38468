//! Output verbosity.

/// How much `cradle` prints while it works.
///
/// Messages, successes, warnings and errors are always shown. The mode
/// only decides the decoration around them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Progress plus every external command before it runs.
    Verbose,
    #[default]
    Normal,
    /// No spinners, banners, hints or detail blocks.
    Quiet,
}

impl OutputMode {
    /// Mode selected by `--verbose` / `--quiet`. Quiet wins.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (_, true) => Self::Quiet,
            (true, false) => Self::Verbose,
            (false, false) => Self::Normal,
        }
    }

    pub fn echoes_commands(self) -> bool {
        self == Self::Verbose
    }

    /// Spinners, banners, hints and detail blocks.
    pub fn shows_progress(self) -> bool {
        self != Self::Quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_flag_wins_over_verbose() {
        assert_eq!(OutputMode::from_flags(true, true), OutputMode::Quiet);
        assert_eq!(OutputMode::from_flags(true, false), OutputMode::Verbose);
        assert_eq!(OutputMode::from_flags(false, false), OutputMode::Normal);
    }

    #[test]
    fn only_verbose_echoes_commands() {
        assert!(OutputMode::Verbose.echoes_commands());
        assert!(!OutputMode::Normal.echoes_commands());
        assert!(!OutputMode::Quiet.echoes_commands());
    }

    #[test]
    fn quiet_hides_progress() {
        assert!(OutputMode::Verbose.shows_progress());
        assert!(OutputMode::Normal.shows_progress());
        assert!(!OutputMode::Quiet.shows_progress());
    }
}
