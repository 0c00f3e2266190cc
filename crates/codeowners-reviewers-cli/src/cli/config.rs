//! Configuration handling for the CLI.
//!
//! This module converts CLI arguments into a validated configuration record
//! and handles GitHub client construction. All validation happens here,
//! before any network activity.

use crate::cli::Args;
use octocrab::Octocrab;
use thiserror::Error;

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration.
    #[error("missing required configuration: {0}")]
    MissingRequired(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// GitHub client construction error.
    #[error("GitHub client error: {0}")]
    GitHubClient(String),
}

/// Application exit codes.
///
/// Runtime failures (fetch, empty reviewer set, submit) are reported but do
/// not produce a distinct exit code; only configuration problems fail the
/// process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// The run completed, whether or not reviewers were requested.
    Success = 0,
    /// Application startup failed (wrong configuration).
    StartupFailure = 1,
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> Self {
        code as u8
    }
}

/// Validated and processed configuration for an assignment run.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Pull request number within the repository.
    pub pull_number: u64,
    /// Personal access token for API authentication.
    pub github_token: String,
    /// Organization or user that owns the repository.
    pub org_name: String,
    /// Repository name.
    pub repo_name: String,
    /// Author handle to exclude from the reviewer list, if any.
    pub author_name: Option<String>,
    /// GitHub API base URL.
    pub github_base_url: String,
    /// Path of the CODEOWNERS file within the repository.
    pub codeowners_path: String,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let pull_number = args.pull_number.as_deref().ok_or_else(|| {
            ConfigError::MissingRequired(
                "pull request number; pass it as the first argument".to_string(),
            )
        })?;
        let pull_number = pull_number.trim().parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid pull request number '{}': please provide a valid number",
                pull_number
            ))
        })?;

        let github_token = args.github_token.clone().ok_or_else(|| {
            ConfigError::MissingRequired(
                "GitHub personal access token; set the GITHUB_TOKEN environment variable"
                    .to_string(),
            )
        })?;

        let org_name = args.org_name.clone().ok_or_else(|| {
            ConfigError::MissingRequired(
                "organization name; set the ORG_NAME environment variable".to_string(),
            )
        })?;

        let repo_name = args.repo_name.clone().ok_or_else(|| {
            ConfigError::MissingRequired(
                "repository name; set the REPO_NAME environment variable".to_string(),
            )
        })?;

        Ok(Self {
            pull_number,
            github_token,
            org_name,
            repo_name,
            author_name: args.author_name.clone(),
            github_base_url: args.github_base_url.clone(),
            codeowners_path: args.codeowners_path.clone(),
        })
    }
}

/// Returns true if the URL is the public GitHub API, ignoring a trailing
/// slash.
fn is_default_base_url(url: &str) -> bool {
    url.trim_end_matches('/') == "https://api.github.com"
}

/// Creates an authenticated Octocrab client from the validated configuration.
pub fn create_octocrab(config: &ValidatedConfig) -> Result<Octocrab, ConfigError> {
    let mut builder = Octocrab::builder();

    if !is_default_base_url(&config.github_base_url) {
        builder = builder
            .base_uri(config.github_base_url.as_str())
            .map_err(|e| ConfigError::GitHubClient(format!("invalid base URL: {}", e)))?;
    }

    builder
        .personal_token(config.github_token.clone())
        .build()
        .map_err(|e| ConfigError::GitHubClient(format!("failed to build client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_args() -> Args {
        Args {
            pull_number: Some("42".to_string()),
            github_token: Some("ghp_test".to_string()),
            org_name: Some("acme".to_string()),
            repo_name: Some("widgets".to_string()),
            author_name: Some("bob".to_string()),
            github_base_url: "https://api.github.com/".to_string(),
            codeowners_path: ".github/CODEOWNERS".to_string(),
            verbose: 0,
        }
    }

    #[test]
    fn test_valid_config() {
        let config = ValidatedConfig::from_args(&test_args()).unwrap();
        assert_eq!(config.pull_number, 42);
        assert_eq!(config.org_name, "acme");
        assert_eq!(config.repo_name, "widgets");
        assert_eq!(config.author_name.as_deref(), Some("bob"));
    }

    #[test]
    fn test_invalid_pull_number() {
        let mut args = test_args();
        args.pull_number = Some("abc".to_string());
        let err = ValidatedConfig::from_args(&args).unwrap_err();
        assert!(err.to_string().contains("invalid pull request number"));
    }

    #[test]
    fn test_missing_pull_number() {
        let mut args = test_args();
        args.pull_number = None;
        let err = ValidatedConfig::from_args(&args).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired(_)));
        assert!(err.to_string().contains("pull request number"));
    }

    #[test]
    fn test_negative_pull_number() {
        let mut args = test_args();
        args.pull_number = Some("-5".to_string());
        assert!(ValidatedConfig::from_args(&args).is_err());
    }

    #[test]
    fn test_missing_token() {
        let mut args = test_args();
        args.github_token = None;
        let err = ValidatedConfig::from_args(&args).unwrap_err();
        assert!(err.to_string().contains("GITHUB_TOKEN"));
    }

    #[test]
    fn test_missing_org() {
        let mut args = test_args();
        args.org_name = None;
        let err = ValidatedConfig::from_args(&args).unwrap_err();
        assert!(err.to_string().contains("ORG_NAME"));
    }

    #[test]
    fn test_missing_repo() {
        let mut args = test_args();
        args.repo_name = None;
        let err = ValidatedConfig::from_args(&args).unwrap_err();
        assert!(err.to_string().contains("REPO_NAME"));
    }

    #[test]
    fn test_author_is_optional() {
        let mut args = test_args();
        args.author_name = None;
        let config = ValidatedConfig::from_args(&args).unwrap();
        assert!(config.author_name.is_none());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(u8::from(ExitCode::Success), 0);
        assert_eq!(u8::from(ExitCode::StartupFailure), 1);
    }

    #[test]
    fn test_default_base_url_ignores_trailing_slash() {
        assert!(is_default_base_url("https://api.github.com/"));
        assert!(is_default_base_url("https://api.github.com"));
        assert!(!is_default_base_url("https://github.example.com/api/v3/"));
    }
}
