// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use onboarding_domain::{Snapshot, ValidationPolicy};
use serde_json::{Value, json};
use time::Date;
use time::macros::date;

use crate::ValidateRequest;

/// Wednesday 14 October 2026.
pub const TODAY: Date = date!(2026 - 10 - 14);

pub fn create_test_policy() -> ValidationPolicy {
    ValidationPolicy::default()
}

/// The wire form of a snapshot that is valid on `TODAY`.
pub fn valid_snapshot_json() -> Value {
    json!({
        "identity": {
            "fullName": "Grace Hopper",
            "email": "grace@example.com",
            "phone": "+1-555-123-4567",
            "dob": "1985-12-09"
        },
        "assignment": {
            "department": "HR",
            "title": "People Partner",
            "startDate": "2026-10-20",
            "employmentType": "Full-time",
            "annualSalary": 85000
        },
        "skills": {
            "primarySkills": ["Recruiting", "Payroll", "Training"],
            "experienceYears": { "Recruiting": 5, "Payroll": 3, "Training": 1 },
            "workingHours": { "start": "08:30", "end": "16:30" },
            "remotePreference": 40
        },
        "emergencyContact": {
            "contactName": "Vincent Hopper",
            "relationship": "Spouse",
            "contactPhone": "+1-555-987-6543"
        },
        "confirmation": true
    })
}

pub fn create_valid_snapshot() -> Snapshot {
    serde_json::from_value(valid_snapshot_json()).unwrap()
}

pub fn create_request(snapshot: Snapshot) -> ValidateRequest {
    ValidateRequest {
        snapshot,
        ..ValidateRequest::default()
    }
}
