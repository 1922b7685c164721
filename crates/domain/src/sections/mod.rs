// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Section schemas.
//!
//! Each schema validates one section without looking at any other, so it
//! can be called and tested on its own. Checks that need data from more
//! than one section live in the cross-field rule engine.

mod assignment;
mod emergency_contact;
mod identity;
mod skills;

pub use assignment::validate_assignment;
pub use emergency_contact::validate_emergency_contact;
pub use identity::{PHONE_FORMAT_MESSAGE, identity_age, validate_identity};
pub use skills::validate_skills;

use crate::issue::{ErrorKind, FieldIssue};
use crate::policy::ValidationContext;
use crate::snapshot::Snapshot;
use crate::types::{FieldPath, Section};

/// Validates the confirmation section: the hire must have confirmed the
/// information is correct.
#[must_use]
pub fn validate_confirmation(confirmed: bool) -> Vec<FieldIssue> {
    if confirmed {
        return Vec::new();
    }

    vec![FieldIssue::new(
        FieldPath::root(Section::Confirmation),
        ErrorKind::Required,
        "You must confirm the information is correct",
    )]
}

/// Runs the schema for a single section of `snapshot`.
///
/// A section absent from the snapshot yields exactly one structural issue
/// at its root path.
#[must_use]
pub fn validate_section(
    snapshot: &Snapshot,
    section: Section,
    ctx: &ValidationContext<'_>,
) -> Vec<FieldIssue> {
    let issues: Option<Vec<FieldIssue>> = match section {
        Section::Identity => snapshot
            .identity
            .as_ref()
            .map(|identity| validate_identity(identity, ctx)),
        Section::Assignment => snapshot
            .assignment
            .as_ref()
            .map(|assignment| validate_assignment(assignment, ctx)),
        Section::Skills => snapshot
            .skills
            .as_ref()
            .map(|skills| validate_skills(skills, ctx)),
        Section::EmergencyContact => snapshot
            .emergency_contact
            .as_ref()
            .map(|contact| validate_emergency_contact(contact, ctx)),
        Section::Confirmation => snapshot.confirmation.map(validate_confirmation),
    };

    issues.unwrap_or_else(|| vec![FieldIssue::missing_section(section)])
}
