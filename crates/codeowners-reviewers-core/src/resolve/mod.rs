//! Reviewer resolution for CODEOWNERS files.
//!
//! This module turns a raw CODEOWNERS document into the set of reviewer
//! handles it mentions. Parsing is deliberately tolerant: comments, blank
//! lines, and rules without owners are skipped rather than rejected, so a
//! malformed document never fails — it just contributes fewer reviewers.
//!
//! # Example
//!
//! ```rust
//! use codeowners_reviewers_core::resolve::parse_reviewers;
//!
//! let input = "*.rs @alice @bob\n/docs/ @carol\n";
//! let reviewers = parse_reviewers(input);
//!
//! assert_eq!(reviewers.iter().collect::<Vec<_>>(), ["alice", "bob", "carol"]);
//! ```

use std::fmt;

/// A deduplicated, insertion-ordered set of reviewer handles.
///
/// Handles are stored with provider markup removed (no leading `@`).
/// Duplicates collapse silently; iteration yields handles in the order they
/// were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewerSet {
    handles: Vec<String>,
}

impl ReviewerSet {
    /// Creates an empty reviewer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes and inserts a handle, returning true if it was not
    /// already present.
    ///
    /// Normalization strips one leading `@` and surrounding whitespace, so
    /// `@alice` and `alice` resolve to the same handle. Tokens that are
    /// empty after normalization are ignored.
    pub fn insert(&mut self, token: &str) -> bool {
        let handle = normalize_handle(token);
        if handle.is_empty() || self.handles.iter().any(|h| h == handle) {
            return false;
        }
        self.handles.push(handle.to_string());
        true
    }

    /// Returns a new set with the author's handle removed.
    ///
    /// Matching is exact; the relative order of the remaining handles is
    /// preserved. Since the set holds no duplicates, at most one entry is
    /// removed.
    pub fn exclude(mut self, author: &str) -> Self {
        self.handles.retain(|h| h != author);
        self
    }

    /// Returns true if the set contains no handles.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Returns the number of handles in the set.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Iterates over handles in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.handles.iter().map(String::as_str)
    }

    /// Consumes the set, yielding the handles as an ordered sequence for
    /// the reviewer request payload.
    pub fn into_vec(self) -> Vec<String> {
        self.handles
    }
}

impl fmt::Display for ReviewerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.handles.join(", "))
    }
}

impl<'a> FromIterator<&'a str> for ReviewerSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for token in iter {
            set.insert(token);
        }
        set
    }
}

/// Strips one leading `@` and surrounding whitespace from an owner token.
fn normalize_handle(token: &str) -> &str {
    let trimmed = token.trim();
    trimmed.strip_prefix('@').unwrap_or(trimmed).trim()
}

/// Parses a CODEOWNERS document into the set of reviewer handles it names.
///
/// Each line is either a comment (first non-whitespace character is `#`),
/// blank, or a rule of the form `<pattern> <owner>...`. Only the owner
/// tokens contribute to the result; the path patterns are irrelevant for
/// reviewer assignment. Lines with no owner tokens after the pattern are
/// skipped, matching the tolerant behavior of the GitHub ecosystem tooling
/// this mirrors.
///
/// Never fails: any input, including the empty string, yields a (possibly
/// empty) set, and parsing the same document always yields the same set.
pub fn parse_reviewers(content: &str) -> ReviewerSet {
    let mut reviewers = ReviewerSet::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // First token is the path pattern, the rest are owners.
        for owner in trimmed.split_whitespace().skip(1) {
            reviewers.insert(owner);
        }
    }

    reviewers
}
