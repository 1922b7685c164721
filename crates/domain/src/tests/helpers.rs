// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;
use time::Date;
use time::macros::date;

use crate::{
    Assignment, EmergencyContact, FieldIssue, Identity, Skills, ValidationPolicy, WorkingHours,
};

/// Wednesday 14 October 2026.
pub const AS_OF: Date = date!(2026 - 10 - 14);

pub fn create_test_policy() -> ValidationPolicy {
    ValidationPolicy::default()
}

pub fn create_test_identity() -> Identity {
    Identity {
        full_name: String::from("Ada Lovelace"),
        email: String::from("ada@example.com"),
        phone: String::from("+1-555-123-4567"),
        dob: String::from("1990-05-20"),
        profile_image: None,
    }
}

pub fn create_test_assignment() -> Assignment {
    Assignment {
        department: String::from("Engineering"),
        title: String::from("Software Engineer"),
        start_date: String::from("2026-10-19"),
        employment_type: String::from("Salaried"),
        annual_salary: Some(120_000.0),
        hourly_rate: None,
        manager_id: Some(String::from("MGR-7")),
    }
}

pub fn create_test_skills() -> Skills {
    let mut experience_years: BTreeMap<String, Option<f64>> = BTreeMap::new();
    experience_years.insert(String::from("Go"), Some(2.0));
    experience_years.insert(String::from("Rust"), Some(4.0));
    experience_years.insert(String::from("Python"), Some(6.0));

    Skills {
        primary_skills: vec![
            String::from("Go"),
            String::from("Rust"),
            String::from("Python"),
        ],
        experience_years,
        working_hours: WorkingHours::default(),
        remote_preference: Some(20.0),
        notes: None,
        manager_approved: None,
    }
}

pub fn create_test_emergency_contact() -> EmergencyContact {
    EmergencyContact {
        contact_name: String::from("Charles Babbage"),
        relationship: String::from("Friend"),
        contact_phone: String::from("+44-207-946-0958"),
        guardian_name: String::new(),
        guardian_phone: String::new(),
    }
}

pub fn paths(issues: &[FieldIssue]) -> Vec<&str> {
    issues.iter().map(|issue| issue.path.as_str()).collect()
}
