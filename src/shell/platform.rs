//! Platform detection.

/// Environment variables set by common CI providers.
const CI_ENV_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
///
/// Used to auto-detect CI and force non-interactive mode in `main()`.
pub fn is_ci() -> bool {
    is_ci_with_env(|key| std::env::var(key).is_ok())
}

/// Check for CI with a custom env var lookup function.
///
/// This allows testing without modifying actual environment variables.
pub fn is_ci_with_env<F>(is_set: F) -> bool
where
    F: Fn(&str) -> bool,
{
    CI_ENV_VARS.iter().any(|key| is_set(key))
}
