// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reusable predicates and parsers shared by the section schemas and
//! cross-field rules.
//!
//! All functions are pure. Parsers return a `Result`; nothing here panics
//! on user input.

use crate::error::DomainError;
use regex::Regex;
use std::sync::LazyLock;
use time::macros::format_description;
use time::{Date, Time};

#[allow(clippy::expect_used)] // literal pattern
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+[0-9]{1,3}-[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("phone pattern compiles")
});

#[allow(clippy::expect_used)] // literal pattern
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Returns whether `s` is an international phone number of the form
/// `+<1-3 digits>-<3 digits>-<3 digits>-<4 digits>`.
///
/// Only ASCII digits are accepted.
#[must_use]
pub fn is_phone(s: &str) -> bool {
    PHONE_PATTERN.is_match(s)
}

/// Returns whether `s` has the shape of an email address.
///
/// The local part may not start with a dot, and no part of the address
/// may contain two consecutive dots. Domain labels must start with a
/// letter or digit but may end with a hyphen, so `a@b-.com` is accepted.
/// Surrounding whitespace is not stripped and fails the match.
#[must_use]
pub fn is_email(s: &str) -> bool {
    !s.starts_with('.') && !s.contains("..") && EMAIL_PATTERN.is_match(s)
}

/// Computes age in whole years on `as_of` for someone born on `dob`.
///
/// One year is subtracted when the birthday has not yet come round in the
/// `as_of` year. A `dob` after `as_of` yields a negative age.
///
/// # Arguments
///
/// * `dob` - The date of birth
/// * `as_of` - The date to evaluate the age on
#[must_use]
pub fn age_from_date(dob: Date, as_of: Date) -> i32 {
    let mut age: i32 = as_of.year() - dob.year();

    let before_birthday: bool = (u8::from(as_of.month()), as_of.day())
        < (u8::from(dob.month()), dob.day());
    if before_birthday {
        age -= 1;
    }

    age
}

/// Parses a `YYYY-MM-DD` date, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the input is empty or is not a
/// real calendar date.
pub fn parse_date_or_fail(s: &str) -> Result<Date, DomainError> {
    let trimmed: &str = s.trim();

    if trimmed.is_empty() {
        return Err(DomainError::InvalidDate {
            date_string: s.to_string(),
            error: String::from("date is empty"),
        });
    }

    Date::parse(trimmed, format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::InvalidDate {
            date_string: s.to_string(),
            error: e.to_string(),
        }
    })
}

/// Parses a 24-hour `HH:MM` time of day.
///
/// # Errors
///
/// Returns `DomainError::InvalidTime` if the input does not parse.
pub fn parse_time_of_day(s: &str) -> Result<Time, DomainError> {
    Time::parse(s.trim(), format_description!("[hour]:[minute]")).map_err(|e| {
        DomainError::InvalidTime {
            time_string: s.to_string(),
            error: e.to_string(),
        }
    })
}

/// Counts whitespace-separated words.
#[must_use]
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Returns the value if it is present and finite.
///
/// Blank numeric inputs arrive either as `None` or as a non-finite value;
/// both mean "not provided".
#[must_use]
pub fn provided_number(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Returns whether `value` lies in the inclusive range `bounds`.
#[must_use]
pub fn within(value: f64, bounds: (f64, f64)) -> bool {
    value >= bounds.0 && value <= bounds.1
}
