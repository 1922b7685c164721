// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use onboarding_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These describe a malformed request, never an invalid form value. Invalid
/// values are reported as issues inside a successful response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The request field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let field: &str = match &err {
        DomainError::InvalidSection(_) => "sections",
        DomainError::InvalidStep(_) => "step",
        DomainError::InvalidDate { .. } => "asOf",
        DomainError::InvalidTime { .. } => "time",
        DomainError::InvalidDepartment(_) => "department",
        DomainError::InvalidEmploymentType(_) => "employmentType",
    };

    ApiError::InvalidInput {
        field: String::from(field),
        message: err.to_string(),
    }
}
