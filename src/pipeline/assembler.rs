//! Snapshot assembly.
//!
//! This module maps an employee's identity fields, resolved position and
//! reference values onto a [`SnapshotRecord`] for one period.

use crate::lookup::CompensationRates;
use crate::models::{EmployeeRecord, Period, SnapshotRecord};
use crate::resolution::ResolvedPosition;

/// Builds the snapshot of one employee for one period.
///
/// This is a pure field mapping. Calling it for two periods with the same
/// inputs yields records that differ only in year and month.
///
/// # Examples
///
/// ```
/// use position_snapshot::lookup::CompensationRates;
/// use position_snapshot::models::{EmployeeRecord, Period};
/// use position_snapshot::pipeline::assemble;
/// use position_snapshot::resolution::ResolvedPosition;
///
/// let employee = EmployeeRecord {
///     id: "198001012005011001".to_string(),
///     name: "Rina".to_string(),
///     ..Default::default()
/// };
/// let record = assemble(
///     &employee,
///     &ResolvedPosition::default(),
///     &CompensationRates::default(),
///     Period::new(2026, 9),
/// );
/// assert_eq!(record.employee_id, "198001012005011001");
/// assert_eq!((record.year, record.month), (2026, 9));
/// ```
pub fn assemble(
    employee: &EmployeeRecord,
    position: &ResolvedPosition,
    rates: &CompensationRates,
    period: Period,
) -> SnapshotRecord {
    SnapshotRecord {
        employee_id: employee.id.clone(),
        name: employee.name.clone(),
        rank_group: rates.rank_group.clone(),
        status_id: employee.status.id,
        status_name: employee.status.name.clone(),
        job_classification: employee.job_classification.clone(),
        payroll_unit_id: employee.payroll_unit.id.clone(),
        remuneration_unit_id: employee.remuneration_unit.id.clone(),
        grade_id: position.grade.id.clone(),
        remuneration_points: position.grade.remuneration_points,
        job_title: position.title.clone(),
        year: period.year,
        month: period.month,
        remuneration_percent: rates.remuneration_percent,
        tax_percent: rates.tax_percent,
        daily_meal_allowance: rates.daily_meal_allowance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmploymentStatus, GradeInfo, NamedRef};

    fn create_test_inputs() -> (EmployeeRecord, ResolvedPosition, CompensationRates) {
        let employee = EmployeeRecord {
            id: "197512312000121001".to_string(),
            name: "Agus Salim".to_string(),
            job_classification: "DT".to_string(),
            status: EmploymentStatus {
                id: 1,
                name: "PNS".to_string(),
            },
            payroll_unit: NamedRef {
                id: "UG07".to_string(),
                name: "Fakultas Hukum".to_string(),
            },
            remuneration_unit: NamedRef {
                id: "UR07".to_string(),
                name: "Fakultas Hukum".to_string(),
            },
            ..Default::default()
        };
        let position = ResolvedPosition {
            grade: GradeInfo {
                id: "G11".to_string(),
                remuneration_points: 1650,
            },
            title: "Kepala Bagian Umum".to_string(),
            unit: "Bagian Umum".to_string(),
        };
        let rates = CompensationRates {
            rank_group: "III".to_string(),
            tax_percent: 5,
            daily_meal_allowance: 37000,
            remuneration_percent: 100,
        };
        (employee, position, rates)
    }

    #[test]
    fn test_maps_every_field() {
        let (employee, position, rates) = create_test_inputs();
        let record = assemble(&employee, &position, &rates, Period::new(2026, 10));

        assert_eq!(record, SnapshotRecord {
            employee_id: "197512312000121001".to_string(),
            name: "Agus Salim".to_string(),
            rank_group: "III".to_string(),
            status_id: 1,
            status_name: "PNS".to_string(),
            job_classification: "DT".to_string(),
            payroll_unit_id: "UG07".to_string(),
            remuneration_unit_id: "UR07".to_string(),
            grade_id: "G11".to_string(),
            remuneration_points: 1650,
            job_title: "Kepala Bagian Umum".to_string(),
            year: 2026,
            month: 10,
            remuneration_percent: 100,
            tax_percent: 5,
            daily_meal_allowance: 37000,
        });
    }

    #[test]
    fn test_two_periods_differ_only_in_year_and_month() {
        let (employee, position, rates) = create_test_inputs();
        let previous = assemble(&employee, &position, &rates, Period::new(2025, 12));
        let current = assemble(&employee, &position, &rates, Period::new(2026, 1));

        assert_eq!((previous.year, previous.month), (2025, 12));
        assert_eq!((current.year, current.month), (2026, 1));
        assert_eq!(
            SnapshotRecord {
                year: 0,
                month: 0,
                ..previous
            },
            SnapshotRecord {
                year: 0,
                month: 0,
                ..current
            }
        );
    }
}
