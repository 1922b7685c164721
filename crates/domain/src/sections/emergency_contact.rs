// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::issue::{ErrorKind, FieldIssue};
use crate::policy::ValidationContext;
use crate::primitives::is_phone;
use crate::sections::identity::PHONE_FORMAT_MESSAGE;
use crate::snapshot::EmergencyContact;
use crate::types::{FieldPath, Section};

/// Validates the emergency contact section in isolation.
///
/// Guardian fields are not required here; that depends on the hire's age
/// and is decided by the cross-field rules. A guardian phone that has
/// been filled in must still be a well-formed phone number.
#[must_use]
pub fn validate_emergency_contact(
    contact: &EmergencyContact,
    _ctx: &ValidationContext<'_>,
) -> Vec<FieldIssue> {
    let mut issues: Vec<FieldIssue> = Vec::new();

    if contact.contact_name.trim().is_empty() {
        issues.push(FieldIssue::new(
            FieldPath::field(Section::EmergencyContact, "contactName"),
            ErrorKind::Required,
            "Contact name is required",
        ));
    }

    if contact.relationship.trim().is_empty() {
        issues.push(FieldIssue::new(
            FieldPath::field(Section::EmergencyContact, "relationship"),
            ErrorKind::Required,
            "Relationship is required",
        ));
    }

    if !is_phone(&contact.contact_phone) {
        issues.push(FieldIssue::new(
            FieldPath::field(Section::EmergencyContact, "contactPhone"),
            ErrorKind::Format,
            PHONE_FORMAT_MESSAGE,
        ));
    }

    let guardian_phone: &str = &contact.guardian_phone;
    if !guardian_phone.trim().is_empty() && !is_phone(guardian_phone) {
        issues.push(FieldIssue::new(
            FieldPath::field(Section::EmergencyContact, "guardianPhone"),
            ErrorKind::Format,
            PHONE_FORMAT_MESSAGE,
        ));
    }

    issues
}
