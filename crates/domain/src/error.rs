// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised by primitive parsers in the domain layer.
///
/// Invalid form *values* never surface as a `DomainError` from the
/// section schemas; those are reported as [`crate::FieldIssue`]s. These
/// errors exist for the parsers themselves and for the boundary layer
/// translating untyped identifiers into domain types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A date string could not be parsed as `YYYY-MM-DD`.
    InvalidDate {
        /// The offending input.
        date_string: String,
        /// The parser's description of the failure.
        error: String,
    },
    /// A time-of-day string could not be parsed as `HH:MM`.
    InvalidTime {
        /// The offending input.
        time_string: String,
        /// The parser's description of the failure.
        error: String,
    },
    /// Department is not one of the known departments.
    InvalidDepartment(String),
    /// Employment type is not one of the known employment types.
    InvalidEmploymentType(String),
    /// Section identifier does not name a snapshot section.
    InvalidSection(String),
    /// Wizard step number is outside 1..=5.
    InvalidStep(u8),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidTime { time_string, error } => {
                write!(f, "Failed to parse time '{time_string}': {error}")
            }
            Self::InvalidDepartment(value) => write!(f, "Invalid department: '{value}'"),
            Self::InvalidEmploymentType(value) => {
                write!(f, "Invalid employment type: '{value}'")
            }
            Self::InvalidSection(value) => write!(f, "Unknown section: '{value}'"),
            Self::InvalidStep(step) => {
                write!(f, "Invalid wizard step: {step}. Must be between 1 and 5")
            }
        }
    }
}

impl std::error::Error for DomainError {}
