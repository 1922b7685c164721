// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::issue::{ErrorKind, FieldIssue};
use crate::policy::ValidationContext;
use crate::snapshot::Assignment;
use crate::types::{Department, EmploymentType, FieldPath, Section};

/// Validates the assignment section in isolation.
///
/// Covers department and employment type membership and the title
/// length. The start date and compensation fields need the department
/// and employment type as context and are owned by the cross-field
/// rules; this schema never reports against them.
#[must_use]
pub fn validate_assignment(
    assignment: &Assignment,
    ctx: &ValidationContext<'_>,
) -> Vec<FieldIssue> {
    let mut issues: Vec<FieldIssue> = Vec::new();

    if assignment.department.parse::<Department>().is_err() {
        issues.push(FieldIssue::new(
            FieldPath::field(Section::Assignment, "department"),
            ErrorKind::Format,
            "Department must be one of Engineering, Marketing, Sales, HR, Finance",
        ));
    }

    if assignment.title.trim().chars().count() < ctx.policy.min_title_chars {
        issues.push(FieldIssue::new(
            FieldPath::field(Section::Assignment, "title"),
            ErrorKind::Range,
            format!(
                "Position title must be at least {} characters",
                ctx.policy.min_title_chars
            ),
        ));
    }

    if assignment.employment_type.parse::<EmploymentType>().is_err() {
        issues.push(FieldIssue::new(
            FieldPath::field(Section::Assignment, "employmentType"),
            ErrorKind::Format,
            "Employment type must be one of Salaried, PartTime, Contract",
        ));
    }

    issues
}
