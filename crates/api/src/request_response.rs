// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use onboarding::ValidationResult;
use onboarding_domain::{FieldIssue, Snapshot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// API request to validate part or all of a wizard snapshot.
///
/// At most one of `sections` and `step` may be given. With neither, every
/// section is validated, as on final submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    /// The complete form state.
    pub snapshot: Snapshot,
    /// Section names to validate (`identity`, `assignment`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<String>>,
    /// Wizard step number, 1 through 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<u8>,
    /// Validation date (ISO 8601). Defaults to today in UTC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<String>,
}

/// API response carrying a validation verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    /// Whether no issue was found anywhere.
    pub is_valid: bool,
    /// Whether no issue was found in the requested sections.
    pub can_advance: bool,
    /// Messages grouped by field path, in evaluation order.
    pub errors_by_path: BTreeMap<String, Vec<String>>,
    /// Every issue found, in evaluation order.
    pub issues: Vec<FieldIssue>,
}

impl ValidateResponse {
    /// Builds a response from a result and the verdict for the requested
    /// sections.
    #[must_use]
    pub fn from_result(result: ValidationResult, can_advance: bool) -> Self {
        let is_valid: bool = result.is_valid();
        let errors_by_path: BTreeMap<String, Vec<String>> = result.errors_by_path();

        Self {
            is_valid,
            can_advance,
            errors_by_path,
            issues: result.into_issues(),
        }
    }
}
