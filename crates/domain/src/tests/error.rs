// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidDate {
        date_string: String::from("2026-13-01"),
        error: String::from("bad month"),
    };
    assert_eq!(
        format!("{err}"),
        "Failed to parse date '2026-13-01': bad month"
    );

    let err: DomainError = DomainError::InvalidTime {
        time_string: String::from("25:00"),
        error: String::from("bad hour"),
    };
    assert_eq!(format!("{err}"), "Failed to parse time '25:00': bad hour");

    let err: DomainError = DomainError::InvalidDepartment(String::from("Legal"));
    assert_eq!(format!("{err}"), "Invalid department: 'Legal'");

    let err: DomainError = DomainError::InvalidEmploymentType(String::from("Intern"));
    assert_eq!(format!("{err}"), "Invalid employment type: 'Intern'");

    let err: DomainError = DomainError::InvalidSection(String::from("payroll"));
    assert_eq!(format!("{err}"), "Unknown section: 'payroll'");

    let err: DomainError = DomainError::InvalidStep(6);
    assert_eq!(
        format!("{err}"),
        "Invalid wizard step: 6. Must be between 1 and 5"
    );
}
