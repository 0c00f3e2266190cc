//! The reviewer assignment workflow.
//!
//! Fetch the CODEOWNERS document, resolve it to a reviewer set, drop the
//! pull request author, submit the rest. Strictly sequential, no retries:
//! each step completes before the next begins, and a failed step ends the
//! run with a non-fatal outcome rather than an error.

use crate::github_client::GithubClient;
use crate::resolve::parse_reviewers;
use log::{debug, error, info};

/// How an assignment run ended.
///
/// Only `Requested` means reviewers were submitted; the other variants are
/// terminal-but-non-fatal conditions the caller reports without failing the
/// process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignOutcome {
    /// Reviewers were submitted; carries the list that was sent.
    Requested(Vec<String>),
    /// The CODEOWNERS document could not be retrieved.
    FetchFailed,
    /// The document parsed to zero reviewers.
    NoReviewers,
    /// The API rejected the reviewer submission.
    SubmitFailed,
}

/// Runs the full assignment workflow against a pull request.
///
/// The empty-set check happens before author exclusion: a document that
/// names only the author still submits, with an empty reviewer list. Each
/// run is independent; the same document always yields the same reviewer
/// list.
pub async fn assign_reviewers(
    client: &dyn GithubClient,
    pull_number: u64,
    author: Option<&str>,
) -> AssignOutcome {
    let document = match client.fetch_codeowners().await {
        Ok(document) => document,
        Err(e) => {
            error!("Error fetching CODEOWNERS file: {}", e);
            return AssignOutcome::FetchFailed;
        }
    };

    let reviewers = parse_reviewers(&document);
    info!("Parsed reviewers: {}", reviewers);

    if reviewers.is_empty() {
        return AssignOutcome::NoReviewers;
    }

    let reviewers = match author {
        Some(author) => {
            debug!("Excluding author '{}' from the reviewer list", author);
            reviewers.exclude(author)
        }
        None => reviewers,
    };

    let reviewers = reviewers.into_vec();
    match client.request_reviewers(pull_number, &reviewers).await {
        Ok(()) => {
            info!(
                "Requested {} reviewer(s) on pull request #{}",
                reviewers.len(),
                pull_number
            );
            AssignOutcome::Requested(reviewers)
        }
        Err(e) => {
            error!("Error adding reviewers: {}", e);
            AssignOutcome::SubmitFailed
        }
    }
}
