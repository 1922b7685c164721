// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{FieldPath, Section};
use serde::{Deserialize, Serialize};

/// Classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Value fails a shape predicate (phone, email, enum membership, date
    /// syntax).
    #[serde(rename = "FormatError")]
    Format,
    /// Numeric or date value outside an allowed interval.
    #[serde(rename = "RangeError")]
    Range,
    /// Field absent or empty where the current context requires it.
    #[serde(rename = "RequiredFieldError")]
    Required,
    /// Collection-size constraint violated.
    #[serde(rename = "CardinalityError")]
    Cardinality,
    /// Two fields individually valid but jointly inconsistent.
    #[serde(rename = "ConsistencyError")]
    Consistency,
    /// A whole section is missing from the snapshot.
    #[serde(rename = "StructuralError")]
    Structural,
}

/// A single validation failure addressed by field path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldIssue {
    /// The field the failure is reported against.
    pub path: FieldPath,
    /// The failure classification.
    pub kind: ErrorKind,
    /// Human-readable message shown next to the field.
    pub message: String,
}

impl FieldIssue {
    /// Creates a new issue.
    #[must_use]
    pub fn new(path: FieldPath, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            path,
            kind,
            message: message.into(),
        }
    }

    /// Creates the synthetic issue reported when `section` is absent.
    #[must_use]
    pub fn missing_section(section: Section) -> Self {
        Self::new(
            FieldPath::root(section),
            ErrorKind::Structural,
            "Section is missing",
        )
    }
}
