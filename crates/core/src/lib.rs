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

//! Validation engine for the onboarding wizard.
//!
//! The engine consumes a [`Snapshot`](onboarding_domain::Snapshot) and a
//! set of sections and produces a [`ValidationResult`]. It performs no I/O
//! and never mutates its input, so it may be called from any number of
//! callers at once.

mod controller;
mod result;
mod rules;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use controller::{validate, validate_as_of};
pub use result::ValidationResult;
pub use rules::{
    CROSS_FIELD_RULES, CrossFieldRule, RuleCheck, compensation_rule,
    experience_completeness_rule, guardian_rule, remote_approval_rule, start_date_rule,
};
