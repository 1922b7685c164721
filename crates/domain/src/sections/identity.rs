// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::issue::{ErrorKind, FieldIssue};
use crate::policy::ValidationContext;
use crate::primitives::{age_from_date, is_email, is_phone, parse_date_or_fail, word_count};
use crate::snapshot::Identity;
use crate::types::{FieldPath, Section};
use time::Date;

/// Message shown for any phone field that fails the phone pattern.
pub const PHONE_FORMAT_MESSAGE: &str = "Format: +1-123-456-7890";

/// Validates the identity section in isolation.
///
/// Checks the full name length and word count, email shape, phone
/// format, and that the date of birth parses and makes the hire an
/// adult on `ctx.as_of`.
///
/// # Arguments
///
/// * `identity` - The identity section to validate
/// * `ctx` - The validation date and policy
///
/// # Returns
///
/// The issues found, in field order. Empty when the section is valid.
#[must_use]
pub fn validate_identity(identity: &Identity, ctx: &ValidationContext<'_>) -> Vec<FieldIssue> {
    let mut issues: Vec<FieldIssue> = Vec::new();
    let policy = ctx.policy;

    // Rule: full name has a minimum length and at least two words
    let name_path: FieldPath = FieldPath::field(Section::Identity, "fullName");
    let name: &str = identity.full_name.trim();
    if name.chars().count() < policy.min_full_name_chars {
        issues.push(FieldIssue::new(
            name_path.clone(),
            ErrorKind::Range,
            format!(
                "Full name must be at least {} characters",
                policy.min_full_name_chars
            ),
        ));
    }
    if word_count(name) < policy.min_full_name_words {
        issues.push(FieldIssue::new(
            name_path,
            ErrorKind::Format,
            format!("Provide at least {} words", policy.min_full_name_words),
        ));
    }

    if !is_email(&identity.email) {
        issues.push(FieldIssue::new(
            FieldPath::field(Section::Identity, "email"),
            ErrorKind::Format,
            "Invalid email address",
        ));
    }

    if !is_phone(&identity.phone) {
        issues.push(FieldIssue::new(
            FieldPath::field(Section::Identity, "phone"),
            ErrorKind::Format,
            PHONE_FORMAT_MESSAGE,
        ));
    }

    // Rule: date of birth parses and the hire is an adult
    let dob_path: FieldPath = FieldPath::field(Section::Identity, "dob");
    match parse_date_or_fail(&identity.dob) {
        Ok(dob) => {
            let age: i32 = age_from_date(dob, ctx.as_of);
            if age < policy.adult_age {
                issues.push(FieldIssue::new(
                    dob_path,
                    ErrorKind::Range,
                    format!("Must be at least {} years old", policy.adult_age),
                ));
            }
        }
        Err(_) => {
            issues.push(FieldIssue::new(dob_path, ErrorKind::Format, "Invalid date"));
        }
    }

    issues
}

/// Returns the hire's age on `as_of`, or `None` if the date of birth does
/// not parse.
#[must_use]
pub fn identity_age(identity: &Identity, as_of: Date) -> Option<i32> {
    parse_date_or_fail(&identity.dob)
        .ok()
        .map(|dob| age_from_date(dob, as_of))
}
