// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! API boundary for the onboarding wizard.
//!
//! Translates requests from the wizard UI into validation calls and
//! verdicts into response DTOs. Malformed selectors are API errors; an
//! invalid snapshot is a successful response carrying issues.

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error};
pub use handlers::{
    WizardStep, resolve_as_of, resolve_sections, validate_request, validate_step,
};
pub use request_response::{ValidateRequest, ValidateResponse};
