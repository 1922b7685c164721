// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod issue;
mod policy;
mod primitives;
mod sections;
mod snapshot;
mod types;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use issue::{ErrorKind, FieldIssue};
pub use policy::{ValidationContext, ValidationPolicy};
pub use primitives::{
    age_from_date, is_email, is_phone, parse_date_or_fail, parse_time_of_day, provided_number,
    within, word_count,
};
pub use sections::{
    PHONE_FORMAT_MESSAGE, identity_age, validate_assignment, validate_confirmation,
    validate_emergency_contact, validate_identity, validate_section, validate_skills,
};
pub use snapshot::{Assignment, EmergencyContact, Identity, Skills, Snapshot, WorkingHours};
pub use types::{Department, EmploymentType, FieldPath, Section, SectionSet};
