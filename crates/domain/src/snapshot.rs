// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Raw form state handed to the validation engine.
//!
//! Every type here holds values exactly as the wizard collected them:
//! text stays text, numbers are optional, dates and enums are still
//! strings. Parsing and interpretation belong to the section schemas and
//! cross-field rules, which only ever read a snapshot.

use crate::types::Section;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The complete set of entered values at one instant.
///
/// A section set to `None` is structurally missing; the controller
/// reports it once at the section root instead of validating its fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub identity: Option<Identity>,
    #[serde(default)]
    pub assignment: Option<Assignment>,
    #[serde(default)]
    pub skills: Option<Skills>,
    #[serde(default)]
    pub emergency_contact: Option<EmergencyContact>,
    #[serde(default)]
    pub confirmation: Option<bool>,
}

impl Snapshot {
    /// Returns whether `section` is present in this snapshot.
    #[must_use]
    pub const fn has_section(&self, section: Section) -> bool {
        match section {
            Section::Identity => self.identity.is_some(),
            Section::Assignment => self.assignment.is_some(),
            Section::Skills => self.skills.is_some(),
            Section::EmergencyContact => self.emergency_contact.is_some(),
            Section::Confirmation => self.confirmation.is_some(),
        }
    }
}

/// Personal identity fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Identity {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// Date of birth as `YYYY-MM-DD`.
    pub dob: String,
    /// Opaque reference to an uploaded picture; never inspected.
    pub profile_image: Option<String>,
}

/// Job assignment fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Assignment {
    /// Department name; must parse as a [`crate::Department`].
    pub department: String,
    pub title: String,
    /// Start date as `YYYY-MM-DD`.
    pub start_date: String,
    /// Employment type; must parse as a [`crate::EmploymentType`].
    pub employment_type: String,
    pub annual_salary: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub manager_id: Option<String>,
}

/// Skills and working preference fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    /// Selected skills. Order is kept stable for display; validation
    /// treats it as a set.
    pub primary_skills: Vec<String>,
    /// Years of experience keyed by skill name. A `None` entry means the
    /// input was left blank.
    pub experience_years: BTreeMap<String, Option<f64>>,
    pub working_hours: WorkingHours,
    /// Percentage of time worked remotely, 0 to 100.
    pub remote_preference: Option<f64>,
    pub notes: Option<String>,
    pub manager_approved: Option<bool>,
}

/// Preferred daily working window as `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkingHours {
    pub start: String,
    pub end: String,
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            start: String::from("09:00"),
            end: String::from("17:00"),
        }
    }
}

/// Emergency contact fields.
///
/// Guardian fields are only required for hires under the guardian age,
/// which the cross-field rules decide from the identity section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmergencyContact {
    pub contact_name: String,
    pub relationship: String,
    pub contact_phone: String,
    pub guardian_name: String,
    pub guardian_phone: String,
}
