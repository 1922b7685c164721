// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// One of the five logical sections of an onboarding snapshot.
///
/// Declaration order is the canonical evaluation order: section schema
/// output is always emitted identity first, confirmation last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    /// Personal identity: name, contact details, date of birth.
    Identity,
    /// Job assignment: department, title, start date, compensation.
    Assignment,
    /// Skills and working preferences.
    Skills,
    /// Emergency contact and, for minors, guardian details.
    EmergencyContact,
    /// Final confirmation checkbox.
    Confirmation,
}

impl Section {
    /// All sections in canonical order.
    pub const ALL: [Self; 5] = [
        Self::Identity,
        Self::Assignment,
        Self::Skills,
        Self::EmergencyContact,
        Self::Confirmation,
    ];

    /// Returns the path segment naming this section.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Assignment => "assignment",
            Self::Skills => "skills",
            Self::EmergencyContact => "emergencyContact",
            Self::Confirmation => "confirmation",
        }
    }

    /// Returns the section owned by a wizard step.
    ///
    /// Steps are numbered 1 through 5 in the order the wizard presents
    /// them.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStep` if `step` is outside 1..=5.
    pub const fn for_step(step: u8) -> Result<Self, DomainError> {
        match step {
            1 => Ok(Self::Identity),
            2 => Ok(Self::Assignment),
            3 => Ok(Self::Skills),
            4 => Ok(Self::EmergencyContact),
            5 => Ok(Self::Confirmation),
            _ => Err(DomainError::InvalidStep(step)),
        }
    }
}

impl FromStr for Section {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "identity" => Ok(Self::Identity),
            "assignment" => Ok(Self::Assignment),
            "skills" => Ok(Self::Skills),
            "emergencyContact" => Ok(Self::EmergencyContact),
            "confirmation" => Ok(Self::Confirmation),
            _ => Err(DomainError::InvalidSection(s.to_string())),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A set of sections, typically the sections a wizard step owns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionSet(BTreeSet<Section>);

impl SectionSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Creates the set of all five sections, as used for final submission.
    #[must_use]
    pub fn all() -> Self {
        Section::ALL.into_iter().collect()
    }

    /// Creates a set holding a single section.
    #[must_use]
    pub fn only(section: Section) -> Self {
        std::iter::once(section).collect()
    }

    /// Adds a section to the set.
    pub fn insert(&mut self, section: Section) {
        self.0.insert(section);
    }

    /// Returns whether the set contains `section`.
    #[must_use]
    pub fn contains(&self, section: Section) -> bool {
        self.0.contains(&section)
    }

    /// Returns whether any of `sections` is in this set.
    #[must_use]
    pub fn intersects(&self, sections: &[Section]) -> bool {
        sections.iter().any(|section| self.0.contains(section))
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the sections in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Section> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Section> for SectionSet {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Dot-delimited address of a field for error reporting.
///
/// The first segment is always a section name (`assignment.startDate`,
/// `skills.experienceYears.Rust`). A path with a single segment addresses
/// the section root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    /// Creates the root path of a section.
    #[must_use]
    pub fn root(section: Section) -> Self {
        Self(section.as_str().to_string())
    }

    /// Creates the path of a field directly under a section.
    #[must_use]
    pub fn field(section: Section, field: &str) -> Self {
        Self(format!("{}.{field}", section.as_str()))
    }

    /// Extends this path with one more segment.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        Self(format!("{}.{segment}", self.0))
    }

    /// Returns the dotted representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the section this path belongs to, if its first segment
    /// names one.
    #[must_use]
    pub fn section(&self) -> Option<Section> {
        let head: &str = self.0.split('.').next().unwrap_or_default();
        head.parse().ok()
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Departments a new hire can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    #[serde(rename = "HR")]
    Hr,
    Finance,
}

impl Department {
    /// Returns the wire representation of this department.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Marketing => "Marketing",
            Self::Sales => "Sales",
            Self::Hr => "HR",
            Self::Finance => "Finance",
        }
    }

    /// Returns whether start dates in this department are restricted to
    /// exclude the end of the working week.
    #[must_use]
    pub const fn restricts_start_weekday(&self) -> bool {
        matches!(self, Self::Hr | Self::Finance)
    }
}

impl FromStr for Department {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Engineering" => Ok(Self::Engineering),
            "Marketing" => Ok(Self::Marketing),
            "Sales" => Ok(Self::Sales),
            "HR" => Ok(Self::Hr),
            "Finance" => Ok(Self::Finance),
            _ => Err(DomainError::InvalidDepartment(s.to_string())),
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a new hire is employed, which decides the compensation field that
/// must be filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    /// Full-time; paid an annual salary.
    Salaried,
    /// Part-time; no compensation field is required.
    PartTime,
    /// Contractor; paid an hourly rate.
    Contract,
}

impl EmploymentType {
    /// Returns the canonical representation of this employment type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Salaried => "Salaried",
            Self::PartTime => "PartTime",
            Self::Contract => "Contract",
        }
    }
}

impl FromStr for EmploymentType {
    type Err = DomainError;

    /// Accepts both the canonical names and the labels the wizard's job
    /// type select submits (`Full-time`, `Part-time`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Salaried" | "Full-time" => Ok(Self::Salaried),
            "PartTime" | "Part-time" => Ok(Self::PartTime),
            "Contract" => Ok(Self::Contract),
            _ => Err(DomainError::InvalidEmploymentType(s.to_string())),
        }
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
