//! CODEOWNERS Reviewers CLI
//!
//! A command-line tool that requests the owners listed in a repository's
//! CODEOWNERS file as reviewers on a pull request.

use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode as StdExitCode;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::config::{create_octocrab, ExitCode, ValidatedConfig};
use cli::github::OctocrabClient;
use cli::output::ConsoleOutput;
use cli::Args;
use codeowners_reviewers_core::assign::{assign_reviewers, AssignOutcome};

#[tokio::main]
async fn main() -> StdExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose);

    let exit_code = run(args).await;
    StdExitCode::from(u8::from(exit_code))
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(level.into())
        .add_directive("octocrab=warn".parse().unwrap())
        .add_directive("hyper=warn".parse().unwrap())
        .add_directive("reqwest=warn".parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Run the reviewer assignment with the given arguments.
async fn run(args: Args) -> ExitCode {
    let use_colors = io::stdout().is_terminal();
    let mut stdout = ConsoleOutput::new(io::stdout().lock(), use_colors);
    let mut stderr = ConsoleOutput::new(io::stderr().lock(), io::stderr().is_terminal());

    // Validate configuration before any network activity
    let config = match ValidatedConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            let _ = stderr.write_error(&e.to_string());
            return ExitCode::StartupFailure;
        }
    };

    info!(
        "Repository: {}/{}, pull request: #{}",
        config.org_name, config.repo_name, config.pull_number
    );
    debug!("CODEOWNERS path: {}", config.codeowners_path);

    let octocrab = match create_octocrab(&config) {
        Ok(client) => client,
        Err(e) => {
            let _ = stderr.write_error(&e.to_string());
            return ExitCode::StartupFailure;
        }
    };

    let client = OctocrabClient::new(
        octocrab,
        &config.org_name,
        &config.repo_name,
        &config.codeowners_path,
    );

    let outcome = assign_reviewers(&client, config.pull_number, config.author_name.as_deref()).await;

    // Runtime failures are reported without a failure exit code
    match outcome {
        AssignOutcome::Requested(reviewers) => {
            let _ = stdout.write_requested(config.pull_number, &reviewers);
        }
        AssignOutcome::FetchFailed => {
            let _ = stderr.write_failure("Failed to retrieve CODEOWNERS file.");
        }
        AssignOutcome::NoReviewers => {
            let _ = stderr.write_failure("No reviewers found in CODEOWNERS.");
        }
        AssignOutcome::SubmitFailed => {
            let _ = stderr.write_failure("Failed to request reviewers on the pull request.");
        }
    }

    ExitCode::Success
}
