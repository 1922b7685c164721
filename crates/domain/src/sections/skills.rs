// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::issue::{ErrorKind, FieldIssue};
use crate::policy::ValidationContext;
use crate::primitives::{parse_time_of_day, provided_number};
use crate::snapshot::{Skills, WorkingHours};
use crate::types::{FieldPath, Section};
use std::collections::BTreeSet;
use time::Time;

/// Validates the skills section in isolation.
///
/// Whether every selected skill has an experience entry, and whether a
/// high remote preference is approved, are cross-field concerns handled
/// by the rule engine.
#[must_use]
pub fn validate_skills(skills: &Skills, ctx: &ValidationContext<'_>) -> Vec<FieldIssue> {
    let mut issues: Vec<FieldIssue> = Vec::new();
    let policy = ctx.policy;

    // Rule: enough distinct skills selected
    let distinct: BTreeSet<&str> = skills.primary_skills.iter().map(String::as_str).collect();
    if distinct.len() < policy.min_primary_skills {
        issues.push(FieldIssue::new(
            FieldPath::field(Section::Skills, "primarySkills"),
            ErrorKind::Cardinality,
            format!("Choose at least {} skills", policy.min_primary_skills),
        ));
    }

    // Rule: experience entries that were filled in are non-negative
    let experience_path: FieldPath = FieldPath::field(Section::Skills, "experienceYears");
    for (skill, years) in &skills.experience_years {
        if provided_number(*years).is_some_and(|v| v < 0.0) {
            issues.push(FieldIssue::new(
                experience_path.child(skill),
                ErrorKind::Range,
                "Experience years must be 0 or more",
            ));
        }
    }

    issues.extend(validate_working_hours(&skills.working_hours));

    let remote_path: FieldPath = FieldPath::field(Section::Skills, "remotePreference");
    match provided_number(skills.remote_preference) {
        None => issues.push(FieldIssue::new(
            remote_path,
            ErrorKind::Required,
            "Remote preference is required",
        )),
        Some(value) if value.fract() != 0.0 || !(0.0..=100.0).contains(&value) => {
            issues.push(FieldIssue::new(
                remote_path,
                ErrorKind::Range,
                "Remote preference must be a whole number between 0 and 100",
            ));
        }
        Some(_) => {}
    }

    if let Some(notes) = &skills.notes
        && notes.chars().count() > policy.max_notes_chars
    {
        issues.push(FieldIssue::new(
            FieldPath::field(Section::Skills, "notes"),
            ErrorKind::Range,
            format!("Notes must be at most {} characters", policy.max_notes_chars),
        ));
    }

    issues
}

fn validate_working_hours(hours: &WorkingHours) -> Vec<FieldIssue> {
    let mut issues: Vec<FieldIssue> = Vec::new();
    let hours_path: FieldPath = FieldPath::field(Section::Skills, "workingHours");

    let start: Option<Time> = parse_time_of_day(&hours.start).ok();
    if start.is_none() {
        issues.push(FieldIssue::new(
            hours_path.child("start"),
            ErrorKind::Format,
            "Time must be HH:MM",
        ));
    }

    let end: Option<Time> = parse_time_of_day(&hours.end).ok();
    if end.is_none() {
        issues.push(FieldIssue::new(
            hours_path.child("end"),
            ErrorKind::Format,
            "Time must be HH:MM",
        ));
    }

    if let (Some(start), Some(end)) = (start, end)
        && end <= start
    {
        issues.push(FieldIssue::new(
            hours_path,
            ErrorKind::Consistency,
            "Working hours must end after they start",
        ));
    }

    issues
}
