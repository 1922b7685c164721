// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use onboarding_domain::{FieldIssue, FieldPath, SectionSet};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::{BTreeMap, HashSet};

/// The verdict of one validation call.
///
/// Holds the ordered list of issues found, with exact duplicates of a
/// (path, message) pair removed. Distinct messages at the same path are
/// all kept; a consumer that shows one message per field shows the first.
///
/// Serializes as `{ "isValid": bool, "errorsByPath": { path: [message] } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    issues: Vec<FieldIssue>,
}

impl ValidationResult {
    /// Builds a result from issues in evaluation order, dropping any issue
    /// whose (path, message) pair has already been seen.
    #[must_use]
    pub fn from_issues(issues: Vec<FieldIssue>) -> Self {
        let mut seen: HashSet<(FieldPath, String)> = HashSet::new();
        let issues: Vec<FieldIssue> = issues
            .into_iter()
            .filter(|issue| seen.insert((issue.path.clone(), issue.message.clone())))
            .collect();

        Self { issues }
    }

    /// Returns whether no issue was found.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns whether no issue was found at a path belonging to one of
    /// `sections`.
    ///
    /// Used to decide whether a wizard step may advance. Issues raised
    /// against other sections (for example a guardian requirement
    /// triggered from the identity step) do not block.
    #[must_use]
    pub fn is_valid_for(&self, sections: &SectionSet) -> bool {
        !self.issues.iter().any(|issue| {
            issue
                .path
                .section()
                .is_some_and(|section| sections.contains(section))
        })
    }

    /// Returns the issues in evaluation order.
    #[must_use]
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Consumes the result, returning its issues.
    #[must_use]
    pub fn into_issues(self) -> Vec<FieldIssue> {
        self.issues
    }

    /// Returns the issues reported at exactly `path`.
    #[must_use]
    pub fn issues_for(&self, path: &str) -> Vec<&FieldIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.path.as_str() == path)
            .collect()
    }

    /// Returns the messages reported at exactly `path`, in order.
    #[must_use]
    pub fn messages_for(&self, path: &str) -> Vec<&str> {
        self.issues_for(path)
            .into_iter()
            .map(|issue| issue.message.as_str())
            .collect()
    }

    /// Groups messages by path. Messages keep their evaluation order
    /// within a path.
    #[must_use]
    pub fn errors_by_path(&self) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for issue in &self.issues {
            grouped
                .entry(issue.path.as_str().to_string())
                .or_default()
                .push(issue.message.clone());
        }
        grouped
    }

    /// Combines two results, keeping `self`'s issues first and applying the
    /// same (path, message) deduplication.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let mut issues: Vec<FieldIssue> = self.issues;
        issues.extend(other.issues);
        Self::from_issues(issues)
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("errorsByPath", &self.errors_by_path())?;
        state.end()
    }
}
