//! CLI module for the CODEOWNERS reviewer assigner.
//!
//! This module provides command-line argument parsing using Clap with
//! environment variable support, matching the configuration surface of the
//! original reviewer-assignment script (GITHUB_TOKEN, ORG_NAME, REPO_NAME,
//! AUTHOR_NAME).

pub mod config;
pub mod github;
pub mod output;

use clap::Parser;

/// Requests the owners listed in a repository's CODEOWNERS file as
/// reviewers on a pull request.
///
/// The CODEOWNERS file is fetched through the GitHub contents API, so the
/// tool needs no local checkout of the repository.
#[derive(Parser, Debug)]
#[command(name = "codeowners-reviewers")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Pull request number to request reviewers on.
    ///
    /// Taken as an optional string so that a missing or non-numeric value
    /// is reported as a configuration error (exit code 1) rather than a
    /// clap usage error (exit code 2).
    pub pull_number: Option<String>,

    /// GitHub personal access token used for both API calls.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Organization or user that owns the repository.
    #[arg(long, env = "ORG_NAME")]
    pub org_name: Option<String>,

    /// Repository name.
    #[arg(long, env = "REPO_NAME")]
    pub repo_name: Option<String>,

    /// Pull request author to exclude from the reviewer list.
    #[arg(long, env = "AUTHOR_NAME")]
    pub author_name: Option<String>,

    /// GitHub base URL for API requests (for GitHub Enterprise).
    #[arg(long, env = "GITHUB_BASE_URL", default_value = "https://api.github.com/")]
    pub github_base_url: String,

    /// Path of the CODEOWNERS file within the repository.
    #[arg(long, env = "CODEOWNERS_PATH", default_value = ".github/CODEOWNERS")]
    pub codeowners_path: String,

    /// Increase verbosity level (-v for debug, -vv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    #[test]
    fn test_positional_pull_number() {
        let args = Args::parse_from(["codeowners-reviewers", "42"]);
        assert_eq!(args.pull_number.as_deref(), Some("42"));
    }

    #[test]
    fn test_missing_pull_number_parses() {
        // The positional is optional at the clap level; absence is
        // reported as a configuration error, not a usage error.
        let args = Args::parse_from(["codeowners-reviewers"]);
        assert!(args.pull_number.is_none());
    }

    // Defaults are asserted through command introspection rather than a
    // parse, which would pick up GITHUB_BASE_URL/CODEOWNERS_PATH from the
    // ambient environment.
    #[test]
    fn test_default_paths() {
        let cmd = Args::command();
        let base_url = cmd
            .get_arguments()
            .find(|a| a.get_id() == "github_base_url")
            .unwrap();
        assert_eq!(
            base_url.get_default_values(),
            [OsStr::new("https://api.github.com/")]
        );

        let codeowners = cmd
            .get_arguments()
            .find(|a| a.get_id() == "codeowners_path")
            .unwrap();
        assert_eq!(
            codeowners.get_default_values(),
            [OsStr::new(".github/CODEOWNERS")]
        );
    }

    #[test]
    fn test_explicit_flags() {
        let args = Args::parse_from([
            "codeowners-reviewers",
            "17",
            "--github-token",
            "ghp_test",
            "--org-name",
            "acme",
            "--repo-name",
            "widgets",
            "--author-name",
            "bob",
            "--github-base-url",
            "https://github.example.com/api/v3/",
            "--codeowners-path",
            "CODEOWNERS",
        ]);
        assert_eq!(args.github_token.as_deref(), Some("ghp_test"));
        assert_eq!(args.org_name.as_deref(), Some("acme"));
        assert_eq!(args.repo_name.as_deref(), Some("widgets"));
        assert_eq!(args.author_name.as_deref(), Some("bob"));
        assert_eq!(args.github_base_url, "https://github.example.com/api/v3/");
        assert_eq!(args.codeowners_path, "CODEOWNERS");
    }

    #[test]
    fn test_verbose_flag() {
        let args = Args::parse_from(["codeowners-reviewers", "1"]);
        assert_eq!(args.verbose, 0);

        let args = Args::parse_from(["codeowners-reviewers", "1", "-vv"]);
        assert_eq!(args.verbose, 2);
    }
}
