// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::{BTreeMap, BTreeSet};
use time::Date;
use time::macros::date;

use crate::{ValidationResult, validate_as_of};
use onboarding_domain::{
    Assignment, EmergencyContact, Identity, Section, SectionSet, Skills, Snapshot,
    ValidationContext, ValidationPolicy, WorkingHours,
};

/// Wednesday 14 October 2026.
pub const AS_OF: Date = date!(2026 - 10 - 14);

pub fn create_test_policy() -> ValidationPolicy {
    ValidationPolicy::default()
}

/// A snapshot that passes every schema and rule on `AS_OF`.
pub fn create_valid_snapshot() -> Snapshot {
    let mut experience_years: BTreeMap<String, Option<f64>> = BTreeMap::new();
    experience_years.insert(String::from("Go"), Some(2.0));
    experience_years.insert(String::from("Rust"), Some(4.0));
    experience_years.insert(String::from("Python"), Some(6.0));

    Snapshot {
        identity: Some(Identity {
            full_name: String::from("Ada Lovelace"),
            email: String::from("ada@example.com"),
            phone: String::from("+1-555-123-4567"),
            dob: String::from("1990-05-20"),
            profile_image: Some(String::from("uploads/ada.png")),
        }),
        assignment: Some(Assignment {
            department: String::from("Engineering"),
            title: String::from("Software Engineer"),
            // Monday
            start_date: String::from("2026-10-19"),
            employment_type: String::from("Salaried"),
            annual_salary: Some(120_000.0),
            hourly_rate: None,
            manager_id: Some(String::from("MGR-7")),
        }),
        skills: Some(Skills {
            primary_skills: vec![
                String::from("Go"),
                String::from("Rust"),
                String::from("Python"),
            ],
            experience_years,
            working_hours: WorkingHours::default(),
            remote_preference: Some(20.0),
            notes: Some(String::from("Prefers pairing")),
            manager_approved: None,
        }),
        emergency_contact: Some(EmergencyContact {
            contact_name: String::from("Charles Babbage"),
            relationship: String::from("Friend"),
            contact_phone: String::from("+44-207-946-0958"),
            guardian_name: String::new(),
            guardian_phone: String::new(),
        }),
        confirmation: Some(true),
    }
}

/// A fully populated snapshot with failures in every section and every
/// cross-field rule.
pub fn create_broken_snapshot() -> Snapshot {
    let mut snapshot: Snapshot = create_valid_snapshot();

    let identity = snapshot.identity.as_mut().unwrap();
    identity.full_name = String::from("Ada");
    identity.email = String::from("not-an-email");
    // Nineteen on AS_OF
    identity.dob = String::from("2007-01-01");

    let assignment = snapshot.assignment.as_mut().unwrap();
    assignment.department = String::from("Finance");
    // Saturday
    assignment.start_date = String::from("2026-10-17");
    assignment.employment_type = String::from("Contract");
    assignment.hourly_rate = Some(200.0);
    assignment.title = String::from("IT");

    let skills = snapshot.skills.as_mut().unwrap();
    skills.primary_skills = vec![
        String::from("Go"),
        String::from("Rust"),
        String::from("Python"),
        String::from("SQL"),
    ];
    skills.experience_years.insert(String::from("Rust"), Some(-3.0));
    skills.remote_preference = Some(80.0);
    skills.manager_approved = Some(false);

    let contact = snapshot.emergency_contact.as_mut().unwrap();
    contact.contact_phone = String::from("555");

    snapshot.confirmation = Some(false);
    snapshot
}

pub fn validate_on(snapshot: &Snapshot, sections: &SectionSet) -> ValidationResult {
    let policy: ValidationPolicy = create_test_policy();
    validate_as_of(snapshot, sections, &ValidationContext::new(AS_OF, &policy))
}

pub fn validate_all_on(snapshot: &Snapshot) -> ValidationResult {
    validate_on(snapshot, &SectionSet::all())
}

pub fn validate_step_on(snapshot: &Snapshot, section: Section) -> ValidationResult {
    validate_on(snapshot, &SectionSet::only(section))
}

/// The (path, message) pairs of a result, as a set.
pub fn issue_pairs(result: &ValidationResult) -> BTreeSet<(String, String)> {
    result
        .issues()
        .iter()
        .map(|issue| (issue.path.as_str().to_string(), issue.message.clone()))
        .collect()
}
