//! Remuneration policy selection.
//!
//! This module picks the remuneration implementation table key for an
//! employee. Rules are checked in priority order and the first match wins:
//!
//! 1. The status-only employment status is keyed by status alone.
//! 2. Candidates in a functional job (level name containing "Calon") are
//!    keyed as candidate lecturers or candidate functional staff.
//! 3. Everyone else is keyed by their own status and job classification.

use crate::models::{EmployeeRecord, RemunFilter};

/// Employment status whose rate is looked up by status alone.
pub const STATUS_ONLY_STATUS_ID: i32 = 2;

/// Job title id of functional positions.
pub const FUNCTIONAL_JOB_TITLE_ID: &str = "FUN";

/// Marker in a level name that identifies a candidate. Matched case-sensitively.
pub const CANDIDATE_LEVEL_MARKER: &str = "Calon";

/// SSO role code of lecturers.
pub const LECTURER_SSO_ROLE: &str = "DSN";

/// Status id used for every candidate lookup.
pub const CANDIDATE_STATUS_ID: i32 = 1;

/// Job classification key for candidate lecturers.
pub const CANDIDATE_LECTURER_CLASSIFICATION: &str = "Cados";

/// Job classification key for candidate functional staff.
pub const CANDIDATE_FUNCTIONAL_CLASSIFICATION: &str = "Cafung";

/// Selects the remuneration implementation filter for an employee.
///
/// Whether the lookup is performed at all is decided by the caller: employees
/// without a job classification are not looked up.
///
/// # Examples
///
/// ```
/// use position_snapshot::models::{EmployeeRecord, RemunFilter};
/// use position_snapshot::resolution::select_remun_filter;
///
/// let json = r#"{
///     "jenisJabatan": "FUN",
///     "statusPegawai": {"id": 1},
///     "jabatanSaatIni": {
///         "level": {
///             "nama": "Calon Dosen Awal",
///             "ssoRole": {"code": "DSN"},
///             "jabatan": {"id": "FUN"}
///         }
///     }
/// }"#;
/// let employee: EmployeeRecord = serde_json::from_str(json).unwrap();
///
/// assert_eq!(
///     select_remun_filter(&employee),
///     RemunFilter::StatusAndClassification {
///         status_id: 1,
///         job_classification: "Cados".to_string(),
///     }
/// );
/// ```
pub fn select_remun_filter(employee: &EmployeeRecord) -> RemunFilter {
    let level = &employee.current_position.level;

    if employee.status.id == STATUS_ONLY_STATUS_ID {
        return RemunFilter::StatusOnly {
            status_id: STATUS_ONLY_STATUS_ID,
        };
    }

    if level.job_title.id == FUNCTIONAL_JOB_TITLE_ID && level.name.contains(CANDIDATE_LEVEL_MARKER)
    {
        let classification = if level.sso_role.code == LECTURER_SSO_ROLE {
            CANDIDATE_LECTURER_CLASSIFICATION
        } else {
            CANDIDATE_FUNCTIONAL_CLASSIFICATION
        };
        return RemunFilter::StatusAndClassification {
            status_id: CANDIDATE_STATUS_ID,
            job_classification: classification.to_string(),
        };
    }

    RemunFilter::StatusAndClassification {
        status_id: employee.status.id,
        job_classification: employee.job_classification.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurrentPosition, EmploymentStatus, Level, NamedRef, SsoRole};

    fn create_test_employee(
        status_id: i32,
        classification: &str,
        job_title_id: &str,
        level_name: &str,
        sso_role: &str,
    ) -> EmployeeRecord {
        EmployeeRecord {
            id: "emp_001".to_string(),
            job_classification: classification.to_string(),
            status: EmploymentStatus {
                id: status_id,
                name: "status".to_string(),
            },
            current_position: CurrentPosition {
                level: Level {
                    name: level_name.to_string(),
                    sso_role: SsoRole {
                        code: sso_role.to_string(),
                        description: String::new(),
                    },
                    job_title: NamedRef {
                        id: job_title_id.to_string(),
                        name: "Jabatan".to_string(),
                    },
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn keyed(status_id: i32, classification: &str) -> RemunFilter {
        RemunFilter::StatusAndClassification {
            status_id,
            job_classification: classification.to_string(),
        }
    }

    #[test]
    fn test_status_two_ignores_classification() {
        let employee = create_test_employee(2, "DT", "STR", "Kepala", "STR");
        assert_eq!(
            select_remun_filter(&employee),
            RemunFilter::StatusOnly { status_id: 2 }
        );
    }

    #[test]
    fn test_status_two_wins_over_candidate_rule() {
        let employee = create_test_employee(2, "FUN", "FUN", "Calon Dosen", "DSN");
        assert_eq!(
            select_remun_filter(&employee),
            RemunFilter::StatusOnly { status_id: 2 }
        );
    }

    #[test]
    fn test_candidate_lecturer() {
        let employee = create_test_employee(1, "FUN", "FUN", "Calon Dosen Awal", "DSN");
        assert_eq!(select_remun_filter(&employee), keyed(1, "Cados"));
    }

    #[test]
    fn test_candidate_functional_staff() {
        let employee = create_test_employee(1, "FUN", "FUN", "Calon Pranata Komputer", "TDK");
        assert_eq!(select_remun_filter(&employee), keyed(1, "Cafung"));
    }

    #[test]
    fn test_candidate_rule_forces_status_one() {
        let employee = create_test_employee(3, "FUN", "FUN", "Calon Dosen", "DSN");
        assert_eq!(select_remun_filter(&employee), keyed(1, "Cados"));
    }

    #[test]
    fn test_candidate_marker_is_case_sensitive() {
        let employee = create_test_employee(1, "FUN", "FUN", "calon Dosen", "DSN");
        assert_eq!(select_remun_filter(&employee), keyed(1, "FUN"));
    }

    #[test]
    fn test_candidate_marker_matches_anywhere_in_level_name() {
        let employee = create_test_employee(1, "FUN", "FUN", "Dosen (Calon)", "DSN");
        assert_eq!(select_remun_filter(&employee), keyed(1, "Cados"));
    }

    #[test]
    fn test_candidate_rule_requires_functional_job_title() {
        let employee = create_test_employee(1, "DT", "STR", "Calon Kepala", "DSN");
        assert_eq!(select_remun_filter(&employee), keyed(1, "DT"));
    }

    #[test]
    fn test_default_uses_own_status_and_classification() {
        let employee = create_test_employee(4, "FUM", "FUM", "Pelaksana", "TDK");
        assert_eq!(select_remun_filter(&employee), keyed(4, "FUM"));
    }
}
