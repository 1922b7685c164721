// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Validation policy and per-call context.

use time::{Date, Weekday};

/// Tunable limits applied by the section schemas and cross-field rules.
///
/// The default is the onboarding policy in force; tests and callers may
/// construct a different one.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationPolicy {
    /// Minimum age in whole years to be hired.
    pub adult_age: i32,
    /// Hires younger than this must name a guardian.
    pub guardian_age: i32,
    /// The latest allowed start date is this many days after `as_of`.
    pub max_start_days: i64,
    /// Weekdays on which restricted departments may not start.
    pub restricted_start_weekdays: Vec<Weekday>,
    /// Inclusive annual salary bounds for salaried hires.
    pub annual_salary_range: (f64, f64),
    /// Inclusive hourly rate bounds for contractors.
    pub hourly_rate_range: (f64, f64),
    /// Minimum number of distinct primary skills.
    pub min_primary_skills: usize,
    /// Remote preference above this value requires manager approval.
    pub remote_approval_threshold: f64,
    /// Maximum length of the free-form notes, in characters.
    pub max_notes_chars: usize,
    /// Minimum full name length, in characters.
    pub min_full_name_chars: usize,
    /// Minimum number of whitespace-separated words in the full name.
    pub min_full_name_words: usize,
    /// Minimum position title length, in characters.
    pub min_title_chars: usize,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            adult_age: 18,
            guardian_age: 21,
            max_start_days: 90,
            restricted_start_weekdays: vec![Weekday::Friday, Weekday::Saturday],
            annual_salary_range: (30_000.0, 200_000.0),
            hourly_rate_range: (50.0, 150.0),
            min_primary_skills: 3,
            remote_approval_threshold: 50.0,
            max_notes_chars: 500,
            min_full_name_chars: 5,
            min_full_name_words: 2,
            min_title_chars: 3,
        }
    }
}

/// Inputs shared by every schema and rule during one validation call.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    /// The date age and start-date checks are evaluated against.
    pub as_of: Date,
    /// The limits in force.
    pub policy: &'a ValidationPolicy,
}

impl<'a> ValidationContext<'a> {
    /// Creates a context for the given date and policy.
    #[must_use]
    pub const fn new(as_of: Date, policy: &'a ValidationPolicy) -> Self {
        Self { as_of, policy }
    }
}
