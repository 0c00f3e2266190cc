//! GitHub client implementation using octocrab.
//!
//! This module provides the octocrab-based implementation of the
//! GithubClient trait. The client is bound to one repository at
//! construction, so the trait methods only carry per-call data.

use async_trait::async_trait;
use codeowners_reviewers_core::github_client::{GithubClient, GithubClientError, ReviewerRequest};
use http::StatusCode;

/// An octocrab-backed `GithubClient` bound to a single repository.
pub struct OctocrabClient {
    client: octocrab::Octocrab,
    org: String,
    repo: String,
    codeowners_path: String,
}

impl OctocrabClient {
    /// Creates a client for the given repository.
    pub fn new(
        client: octocrab::Octocrab,
        org: impl Into<String>,
        repo: impl Into<String>,
        codeowners_path: impl Into<String>,
    ) -> Self {
        Self {
            client,
            org: org.into(),
            repo: repo.into(),
            codeowners_path: codeowners_path.into(),
        }
    }
}

/// Maps an octocrab error onto the client error taxonomy, carrying the
/// provider's error payload when one is available.
fn map_error(error: octocrab::Error, resource: &str) -> GithubClientError {
    match &error {
        octocrab::Error::GitHub { source, .. } => {
            let status = source.status_code;
            match status {
                StatusCode::NOT_FOUND => GithubClientError::NotFound(resource.to_string()),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    GithubClientError::Auth(source.message.clone())
                }
                _ => {
                    let mut payload = source.message.clone();
                    if let Some(errors) = &source.errors {
                        if let Ok(detail) = serde_json::to_string(errors) {
                            payload.push_str(": ");
                            payload.push_str(&detail);
                        }
                    }
                    GithubClientError::Api(format!("{} ({})", payload, status))
                }
            }
        }
        // Anything without a GitHub error payload failed before the API
        // answered.
        _ => GithubClientError::Network(error.to_string()),
    }
}

#[async_trait]
impl GithubClient for OctocrabClient {
    async fn fetch_codeowners(&self) -> Result<String, GithubClientError> {
        let mut response = self
            .client
            .repos(&self.org, &self.repo)
            .get_content()
            .path(&self.codeowners_path)
            .send()
            .await
            .map_err(|e| map_error(e, &self.codeowners_path))?;

        let item = response
            .take_items()
            .into_iter()
            .next()
            .ok_or_else(|| GithubClientError::NotFound(self.codeowners_path.clone()))?;

        // Directories and oversized files come back without inline content.
        item.decoded_content().ok_or_else(|| {
            GithubClientError::Api(format!(
                "contents of '{}' were not returned inline",
                self.codeowners_path
            ))
        })
    }

    async fn request_reviewers(
        &self,
        pull_number: u64,
        reviewers: &[String],
    ) -> Result<(), GithubClientError> {
        let route = format!(
            "/repos/{}/{}/pulls/{}/requested_reviewers",
            self.org, self.repo, pull_number
        );
        let body = ReviewerRequest::new(reviewers.to_vec());

        let _: serde_json::Value = self
            .client
            .post(route, Some(&body))
            .await
            .map_err(|e| map_error(e, &format!("pull request #{}", pull_number)))?;

        Ok(())
    }
}
