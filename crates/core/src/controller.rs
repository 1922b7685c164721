// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Incremental validation controller.
//!
//! The controller composes the two validation layers: section schemas for
//! the requested sections, then every cross-field rule triggered by them.
//! Validating the full section set gives the same issues as validating
//! each section separately and merging the results.

use crate::result::ValidationResult;
use crate::rules::{CROSS_FIELD_RULES, CrossFieldRule};
use onboarding_domain::{
    FieldIssue, Section, SectionSet, Snapshot, ValidationContext, ValidationPolicy,
    validate_section,
};
use time::{Date, OffsetDateTime};
use tracing::{debug, trace};

/// Validates `sections` of `snapshot` as of today (UTC) under the default
/// policy.
///
/// See [`validate_as_of`] for the evaluation order and the handling of
/// missing sections.
///
/// # Arguments
///
/// * `snapshot` - The complete form state, including sections the current
///   step does not own
/// * `sections` - The sections the current step owns
#[must_use]
pub fn validate(snapshot: &Snapshot, sections: &SectionSet) -> ValidationResult {
    let policy: ValidationPolicy = ValidationPolicy::default();
    let today: Date = OffsetDateTime::now_utc().date();
    validate_as_of(snapshot, sections, &ValidationContext::new(today, &policy))
}

/// Validates `sections` of `snapshot` against an explicit context.
///
/// Evaluation order is:
///
/// 1. the section schema of each requested section, in canonical order
///    (a requested section that is missing yields one structural issue);
/// 2. one structural issue for each missing section that is not requested
///    but is read by a triggered rule;
/// 3. every triggered cross-field rule whose sections are all present,
///    in rule order.
///
/// The snapshot is only read. Calling this twice with the same inputs
/// yields the same result.
///
/// # Arguments
///
/// * `snapshot` - The complete form state
/// * `sections` - The sections to validate
/// * `ctx` - The validation date and policy
///
/// # Returns
///
/// The merged, deduplicated issues.
#[must_use]
pub fn validate_as_of(
    snapshot: &Snapshot,
    sections: &SectionSet,
    ctx: &ValidationContext<'_>,
) -> ValidationResult {
    let mut issues: Vec<FieldIssue> = Vec::new();

    for section in sections.iter() {
        issues.extend(validate_section(snapshot, section, ctx));
    }

    let triggered: Vec<&CrossFieldRule> = CROSS_FIELD_RULES
        .iter()
        .filter(|rule| rule.is_triggered_by(sections))
        .collect();

    // Sections read by a triggered rule but absent from the snapshot
    for section in Section::ALL {
        let read_by_rule: bool = triggered.iter().any(|rule| rule.triggers.contains(&section));
        if read_by_rule && !sections.contains(section) && !snapshot.has_section(section) {
            issues.push(FieldIssue::missing_section(section));
        }
    }

    for rule in triggered {
        if !rule.can_evaluate(snapshot) {
            debug!(rule = rule.name, "Skipping rule: a section it reads is missing");
            continue;
        }

        let rule_issues: Vec<FieldIssue> = rule.evaluate(snapshot, ctx);
        trace!(rule = rule.name, issues = rule_issues.len(), "Evaluated rule");
        issues.extend(rule_issues);
    }

    let result: ValidationResult = ValidationResult::from_issues(issues);
    debug!(
        as_of = %ctx.as_of,
        sections = ?sections,
        issues = result.issues().len(),
        "Validated snapshot"
    );
    result
}
