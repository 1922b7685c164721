// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Validation entry points for the wizard UI.

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{ValidateRequest, ValidateResponse};
use onboarding::{ValidationResult, validate_as_of};
use onboarding_domain::{
    Section, SectionSet, Snapshot, ValidationContext, ValidationPolicy, parse_date_or_fail,
};
use time::Date;
use tracing::{debug, info};

/// A wizard step and the section it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardStep {
    number: u8,
    section: Section,
}

impl WizardStep {
    /// The number of steps in the wizard.
    pub const COUNT: u8 = 5;

    /// Creates a wizard step from its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns an error if `number` is not between 1 and 5.
    pub fn new(number: u8) -> Result<Self, ApiError> {
        let section: Section = Section::for_step(number).map_err(translate_domain_error)?;
        Ok(Self { number, section })
    }

    /// Returns the 1-based step number.
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.number
    }

    /// Returns the section this step owns.
    #[must_use]
    pub const fn section(&self) -> Section {
        self.section
    }
}

/// Resolves the section subset a request asks for.
///
/// # Arguments
///
/// * `sections` - Explicit section names, if any
/// * `step` - Wizard step number, if any
///
/// # Returns
///
/// The requested sections, or every section when neither selector is given.
///
/// # Errors
///
/// Returns an error if both selectors are given, a section name is unknown,
/// or the step is out of range.
pub fn resolve_sections(
    sections: Option<&[String]>,
    step: Option<u8>,
) -> Result<SectionSet, ApiError> {
    match (sections, step) {
        (Some(_), Some(_)) => Err(ApiError::InvalidInput {
            field: String::from("sections"),
            message: String::from("Provide either sections or step, not both"),
        }),
        (Some(names), None) => names
            .iter()
            .map(|name| name.parse::<Section>().map_err(translate_domain_error))
            .collect(),
        (None, Some(number)) => Ok(SectionSet::only(WizardStep::new(number)?.section())),
        (None, None) => Ok(SectionSet::all()),
    }
}

/// Parses the optional validation date, defaulting to `today`.
///
/// # Errors
///
/// Returns an error if `as_of` is given but is not an ISO 8601 date.
pub fn resolve_as_of(as_of: Option<&str>, today: Date) -> Result<Date, ApiError> {
    as_of.map_or(Ok(today), |value| {
        parse_date_or_fail(value).map_err(translate_domain_error)
    })
}

/// Validates the sections selected by a request.
///
/// # Arguments
///
/// * `request` - The snapshot and selectors
/// * `policy` - The limits in force
/// * `today` - The date used when the request does not name one
///
/// # Returns
///
/// The verdict. An invalid snapshot is still `Ok`; its issues are in the
/// response.
///
/// # Errors
///
/// Returns an error if the selectors or `asOf` are malformed.
pub fn validate_request(
    request: &ValidateRequest,
    policy: &ValidationPolicy,
    today: Date,
) -> Result<ValidateResponse, ApiError> {
    let sections: SectionSet = resolve_sections(request.sections.as_deref(), request.step)?;
    let as_of: Date = resolve_as_of(request.as_of.as_deref(), today)?;

    debug!(sections = ?sections, %as_of, "Validating request");
    Ok(run(&request.snapshot, &sections, &ValidationContext::new(as_of, policy)))
}

/// Validates the section owned by one wizard step.
///
/// # Errors
///
/// Returns an error if `step` is not between 1 and 5.
pub fn validate_step(
    snapshot: &Snapshot,
    step: u8,
    policy: &ValidationPolicy,
    today: Date,
) -> Result<ValidateResponse, ApiError> {
    let step: WizardStep = WizardStep::new(step)?;
    let sections: SectionSet = SectionSet::only(step.section());

    debug!(step = step.number(), section = %step.section(), "Validating wizard step");
    Ok(run(snapshot, &sections, &ValidationContext::new(today, policy)))
}

fn run(
    snapshot: &Snapshot,
    sections: &SectionSet,
    ctx: &ValidationContext<'_>,
) -> ValidateResponse {
    let result: ValidationResult = validate_as_of(snapshot, sections, ctx);
    let can_advance: bool = result.is_valid_for(sections);

    info!(
        is_valid = result.is_valid(),
        can_advance,
        issues = result.issues().len(),
        "Validation complete"
    );
    ValidateResponse::from_result(result, can_advance)
}
