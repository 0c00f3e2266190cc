//! GitHub client trait abstraction for reviewer assignment.
//!
//! This module provides a trait-based abstraction for the two GitHub API
//! calls the workflow needs, allowing different implementations (octocrab
//! in the CLI, mocks in tests).

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// The JSON body of a requested-reviewers POST.
///
/// Serializes to `{ "reviewers": ["alice", "bob"] }`, the shape the
/// pull request requested-reviewers endpoint expects.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewerRequest {
    /// Reviewer handles, without the leading `@`.
    pub reviewers: Vec<String>,
}

impl ReviewerRequest {
    /// Creates a reviewer request body from a handle sequence.
    pub fn new(reviewers: Vec<String>) -> Self {
        Self { reviewers }
    }
}

/// Errors that can occur when interacting with the GitHub client.
#[derive(Debug, Error)]
pub enum GithubClientError {
    /// The API rejected the request; carries the provider's error payload
    /// when one was available.
    #[error("GitHub API error: {0}")]
    Api(String),

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(String),

    /// Authentication was rejected or insufficient.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Trait for GitHub API client implementations.
///
/// A client is constructed for one repository; the workflow never needs to
/// address more than one. Implementations:
/// - `OctocrabClient` in the CLI for real API access
/// - in-memory mocks for workflow tests
#[async_trait]
pub trait GithubClient: Send + Sync {
    /// Fetches the raw CODEOWNERS document for the configured repository.
    ///
    /// # Returns
    ///
    /// * `Ok(text)` - The document contents
    /// * `Err(GithubClientError)` - The file is missing, the token was
    ///   rejected, or the request failed
    async fn fetch_codeowners(&self) -> Result<String, GithubClientError>;

    /// Requests the given reviewers on a pull request.
    ///
    /// # Arguments
    ///
    /// * `pull_number` - The pull request number within the repository
    /// * `reviewers` - Reviewer handles (without the leading '@')
    async fn request_reviewers(
        &self,
        pull_number: u64,
        reviewers: &[String],
    ) -> Result<(), GithubClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reviewer_request_wire_shape() {
        let request = ReviewerRequest::new(vec!["alice".into(), "bob".into()]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "reviewers": ["alice", "bob"] }));
    }

    #[test]
    fn reviewer_request_empty_list() {
        let request = ReviewerRequest::new(Vec::new());
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"reviewers":[]}"#);
    }

    #[test]
    fn github_client_error_display() {
        let err = GithubClientError::Api("bad payload".to_string());
        assert!(err.to_string().contains("bad payload"));

        let err = GithubClientError::NotFound(".github/CODEOWNERS".to_string());
        assert!(err.to_string().contains("CODEOWNERS"));
    }
}
