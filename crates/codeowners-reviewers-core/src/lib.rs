//! CODEOWNERS Reviewers Core
//!
//! A library for deriving pull request reviewers from GitHub CODEOWNERS files.
//!
//! # Features
//!
//! - **Resolver**: Parse a CODEOWNERS document into a deduplicated,
//!   insertion-ordered set of reviewer handles
//! - **Author Exclusion**: Drop the pull request author from the reviewer set
//! - **Workflow**: Fetch, resolve, and submit in one sequential pass through
//!   a pluggable GitHub client trait
//!
//! # Quick Start
//!
//! ```rust
//! use codeowners_reviewers_core::resolve::parse_reviewers;
//!
//! let input = r#"
//! # CODEOWNERS file
//! *.rs @rustacean @github/review-team
//! /docs/ @docs-writer
//! "#;
//!
//! let reviewers = parse_reviewers(input).exclude("rustacean");
//!
//! for handle in reviewers.iter() {
//!     println!("requesting review from {}", handle);
//! }
//! ```
//!
//! # Modules
//!
//! - [`resolve`]: CODEOWNERS reviewer resolution
//! - [`github_client`]: GitHub API client trait abstraction
//! - [`assign`]: The fetch-resolve-submit workflow

pub mod assign;
pub mod github_client;
pub mod resolve;

// Re-export commonly used types at the crate root
pub use assign::{AssignOutcome, assign_reviewers};
pub use github_client::{GithubClient, GithubClientError, ReviewerRequest};
pub use resolve::{ReviewerSet, parse_reviewers};
