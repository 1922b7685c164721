// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cross-field rules.
//!
//! Each rule is a pure function over the whole snapshot that reports
//! problems no single section schema can see. Rules declare the sections
//! they read; the controller runs a rule whenever one of those sections
//! is being validated, and only when all of them are present.
//!
//! Rules never short-circuit each other. They run in the fixed order of
//! [`CROSS_FIELD_RULES`], which decides which message a "first error per
//! field" display shows.

use onboarding_domain::{
    Department, EmploymentType, ErrorKind, FieldIssue, FieldPath, Section, SectionSet, Snapshot,
    ValidationContext, identity_age, parse_date_or_fail, provided_number, within,
};
use std::collections::BTreeSet;
use time::{Date, Duration};

/// Signature shared by every cross-field rule.
pub type RuleCheck = fn(&Snapshot, &ValidationContext<'_>) -> Vec<FieldIssue>;

/// A named cross-field rule and the sections it reads.
#[derive(Debug, Clone, Copy)]
pub struct CrossFieldRule {
    /// Stable identifier used in logs.
    pub name: &'static str,
    /// The sections this rule reads. Validating any of them triggers it.
    pub triggers: &'static [Section],
    check: RuleCheck,
}

impl CrossFieldRule {
    /// Creates a rule.
    #[must_use]
    pub const fn new(name: &'static str, triggers: &'static [Section], check: RuleCheck) -> Self {
        Self {
            name,
            triggers,
            check,
        }
    }

    /// Returns whether validating `sections` should run this rule.
    #[must_use]
    pub fn is_triggered_by(&self, sections: &SectionSet) -> bool {
        sections.intersects(self.triggers)
    }

    /// Returns whether every section this rule reads is present.
    #[must_use]
    pub fn can_evaluate(&self, snapshot: &Snapshot) -> bool {
        self.triggers
            .iter()
            .all(|section| snapshot.has_section(*section))
    }

    /// Runs the rule.
    #[must_use]
    pub fn evaluate(&self, snapshot: &Snapshot, ctx: &ValidationContext<'_>) -> Vec<FieldIssue> {
        (self.check)(snapshot, ctx)
    }
}

/// Every cross-field rule, in evaluation order.
pub static CROSS_FIELD_RULES: [CrossFieldRule; 5] = [
    CrossFieldRule::new("start_date_window", &[Section::Assignment], start_date_rule),
    CrossFieldRule::new("compensation", &[Section::Assignment], compensation_rule),
    CrossFieldRule::new("remote_approval", &[Section::Skills], remote_approval_rule),
    CrossFieldRule::new(
        "guardian_for_minor",
        &[Section::Identity, Section::EmergencyContact],
        guardian_rule,
    ),
    CrossFieldRule::new(
        "experience_completeness",
        &[Section::Skills],
        experience_completeness_rule,
    ),
];

/// Start date must parse, must not be in the past, must fall within the
/// start window, and must avoid restricted weekdays for HR and Finance.
///
/// Every bound that fails is reported; they share `assignment.startDate`.
#[must_use]
pub fn start_date_rule(snapshot: &Snapshot, ctx: &ValidationContext<'_>) -> Vec<FieldIssue> {
    let Some(assignment) = snapshot.assignment.as_ref() else {
        return Vec::new();
    };
    let path: FieldPath = FieldPath::field(Section::Assignment, "startDate");

    let Ok(start) = parse_date_or_fail(&assignment.start_date) else {
        return vec![FieldIssue::new(path, ErrorKind::Format, "Invalid date")];
    };

    let mut issues: Vec<FieldIssue> = Vec::new();
    let policy = ctx.policy;

    if start < ctx.as_of {
        issues.push(FieldIssue::new(
            path.clone(),
            ErrorKind::Range,
            "Start date cannot be in the past",
        ));
    }

    let latest: Option<Date> = ctx
        .as_of
        .checked_add(Duration::days(policy.max_start_days));
    if latest.is_some_and(|latest| start > latest) {
        issues.push(FieldIssue::new(
            path.clone(),
            ErrorKind::Range,
            format!("Start date must be within {} days", policy.max_start_days),
        ));
    }

    let restricted_department: bool = assignment
        .department
        .parse::<Department>()
        .is_ok_and(|department| department.restricts_start_weekday());
    if restricted_department && policy.restricted_start_weekdays.contains(&start.weekday()) {
        let weekdays: Vec<String> = policy
            .restricted_start_weekdays
            .iter()
            .map(ToString::to_string)
            .collect();
        issues.push(FieldIssue::new(
            path,
            ErrorKind::Range,
            format!("HR/Finance cannot start on {}", weekdays.join(" or ")),
        ));
    }

    issues
}

/// The compensation field matching the employment type must be present
/// and in range. Part-time hires need neither.
///
/// An employment type that does not parse is reported by the assignment
/// schema; this rule then has nothing to key on and stays silent.
#[must_use]
pub fn compensation_rule(snapshot: &Snapshot, ctx: &ValidationContext<'_>) -> Vec<FieldIssue> {
    let Some(assignment) = snapshot.assignment.as_ref() else {
        return Vec::new();
    };
    let Ok(employment_type) = assignment.employment_type.parse::<EmploymentType>() else {
        return Vec::new();
    };
    let policy = ctx.policy;

    let issue: Option<FieldIssue> = match employment_type {
        EmploymentType::Salaried => check_compensation(
            assignment.annual_salary,
            policy.annual_salary_range,
            FieldPath::field(Section::Assignment, "annualSalary"),
            "Annual salary required for salaried roles",
            "Annual salary",
        ),
        EmploymentType::Contract => check_compensation(
            assignment.hourly_rate,
            policy.hourly_rate_range,
            FieldPath::field(Section::Assignment, "hourlyRate"),
            "Hourly rate required for contracts",
            "Hourly rate",
        ),
        EmploymentType::PartTime => None,
    };

    issue.into_iter().collect()
}

fn check_compensation(
    value: Option<f64>,
    bounds: (f64, f64),
    path: FieldPath,
    required_message: &str,
    label: &str,
) -> Option<FieldIssue> {
    match provided_number(value) {
        None => Some(FieldIssue::new(path, ErrorKind::Required, required_message)),
        Some(amount) if !within(amount, bounds) => Some(FieldIssue::new(
            path,
            ErrorKind::Range,
            format!(
                "{label} must be {} - {}",
                format_dollars(bounds.0),
                format_dollars(bounds.1)
            ),
        )),
        Some(_) => None,
    }
}

/// Formats a whole-dollar amount with thousands separators, e.g. `$30,000`.
fn format_dollars(amount: f64) -> String {
    let digits: String = format!("{:.0}", amount.abs());
    let mut grouped: String = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if amount < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// A remote preference above the approval threshold requires manager
/// approval.
#[must_use]
pub fn remote_approval_rule(snapshot: &Snapshot, ctx: &ValidationContext<'_>) -> Vec<FieldIssue> {
    let Some(skills) = snapshot.skills.as_ref() else {
        return Vec::new();
    };

    let needs_approval: bool = provided_number(skills.remote_preference)
        .is_some_and(|remote| remote > ctx.policy.remote_approval_threshold);
    if !needs_approval || skills.manager_approved == Some(true) {
        return Vec::new();
    }

    vec![FieldIssue::new(
        FieldPath::field(Section::Skills, "managerApproved"),
        ErrorKind::Required,
        format!(
            "Manager approval required for >{}% remote",
            ctx.policy.remote_approval_threshold
        ),
    )]
}

/// Hires under the guardian age must name a guardian and give the
/// guardian's phone number.
///
/// When the date of birth does not parse the age is unknown and no
/// guardian is demanded; the identity schema reports the date instead.
#[must_use]
pub fn guardian_rule(snapshot: &Snapshot, ctx: &ValidationContext<'_>) -> Vec<FieldIssue> {
    let (Some(identity), Some(contact)) =
        (snapshot.identity.as_ref(), snapshot.emergency_contact.as_ref())
    else {
        return Vec::new();
    };

    let is_minor: bool = identity_age(identity, ctx.as_of)
        .is_some_and(|age| age < ctx.policy.guardian_age);
    if !is_minor {
        return Vec::new();
    }

    let mut issues: Vec<FieldIssue> = Vec::new();
    let guardian_age: i32 = ctx.policy.guardian_age;

    if contact.guardian_name.trim().is_empty() {
        issues.push(FieldIssue::new(
            FieldPath::field(Section::EmergencyContact, "guardianName"),
            ErrorKind::Required,
            format!("Guardian name required for under {guardian_age}"),
        ));
    }

    if contact.guardian_phone.trim().is_empty() {
        issues.push(FieldIssue::new(
            FieldPath::field(Section::EmergencyContact, "guardianPhone"),
            ErrorKind::Required,
            format!("Guardian phone required for under {guardian_age}"),
        ));
    }

    issues
}

/// Every selected skill needs an experience entry.
///
/// One issue per missing skill, in selection order, all at
/// `skills.experienceYears`. Negative entries count as present here; the
/// skills schema reports them at the per-skill path.
#[must_use]
pub fn experience_completeness_rule(
    snapshot: &Snapshot,
    _ctx: &ValidationContext<'_>,
) -> Vec<FieldIssue> {
    let Some(skills) = snapshot.skills.as_ref() else {
        return Vec::new();
    };
    let path: FieldPath = FieldPath::field(Section::Skills, "experienceYears");

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    skills
        .primary_skills
        .iter()
        .filter(|skill| seen.insert(skill.as_str()))
        .filter(|skill| {
            provided_number(skills.experience_years.get(*skill).copied().flatten()).is_none()
        })
        .map(|skill| {
            FieldIssue::new(
                path.clone(),
                ErrorKind::Consistency,
                format!("Provide experience years for {skill}"),
            )
        })
        .collect()
}
