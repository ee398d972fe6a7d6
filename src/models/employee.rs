//! Employee roster record and its nested HR structures.
//!
//! Field names follow the HR GraphQL schema. Any nested object or scalar the
//! API returns as `null` decodes to its zero value, so downstream rules never
//! have to distinguish "absent" from "empty".

use serde::{Deserialize, Deserializer, Serialize};

/// Decodes an explicit JSON `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A generic `{id, nama}` reference used for units, positions and job titles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    /// Identifier; an empty string means the reference is not set.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Display name.
    #[serde(rename = "nama", default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl NamedRef {
    /// Returns true if the reference carries a non-empty identifier.
    pub fn is_set(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Employment status of an employee (e.g. permanent civil servant, contract).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentStatus {
    /// Numeric status identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i32,
    /// Status display name.
    #[serde(rename = "nama", default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Single sign-on role attached to a position level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsoRole {
    /// Role code (e.g. "STR", "DSN").
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    /// Human-readable role description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// A pay grade together with its remuneration points.
///
/// # Example
///
/// ```
/// use position_snapshot::models::GradeInfo;
///
/// let grade: GradeInfo = serde_json::from_str(r#"{"id": "G9", "remun": 1450}"#).unwrap();
/// assert_eq!(grade.id, "G9");
/// assert_eq!(grade.remuneration_points, 1450);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeInfo {
    /// Grade identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Remuneration points for the grade.
    #[serde(rename = "remun", default, deserialize_with = "null_as_default")]
    pub remuneration_points: i32,
}

/// Hierarchical level of the employee's current position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Level identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Level name (e.g. "Calon Dosen Awal").
    #[serde(rename = "nama", default, deserialize_with = "null_as_default")]
    pub name: String,
    /// SSO role associated with the level.
    #[serde(rename = "ssoRole", default, deserialize_with = "null_as_default")]
    pub sso_role: SsoRole,
    /// Job title the level belongs to; its id is the title family (e.g. "FUN").
    #[serde(rename = "jabatan", default, deserialize_with = "null_as_default")]
    pub job_title: NamedRef,
}

/// The employee's current position descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentPosition {
    /// Position identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Hierarchical level.
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: Level,
    /// Sub-level within the level.
    #[serde(rename = "sublevel", default, deserialize_with = "null_as_default")]
    pub sub_level: NamedRef,
    /// Grade attached to the position.
    #[serde(default, deserialize_with = "null_as_default")]
    pub grade: GradeInfo,
}

/// One organizational-unit assignment of an employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitAssignment {
    /// Assignment identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Top-level organizational unit.
    #[serde(rename = "unitKerja", default, deserialize_with = "null_as_default")]
    pub unit: NamedRef,
    /// Department within the unit.
    #[serde(rename = "bagian", default, deserialize_with = "null_as_default")]
    pub department: NamedRef,
    /// Sub-department within the department.
    #[serde(rename = "subbag", default, deserialize_with = "null_as_default")]
    pub sub_department: NamedRef,
    /// Position title held in this assignment.
    #[serde(rename = "posisi", default, deserialize_with = "null_as_default")]
    pub position: NamedRef,
    /// Grade attached to this assignment.
    #[serde(default, deserialize_with = "null_as_default")]
    pub grade: GradeInfo,
    /// True for an additional (secondary) assignment.
    #[serde(rename = "isSecondary", default, deserialize_with = "null_as_default")]
    pub is_secondary: bool,
}

impl UnitAssignment {
    /// Returns the most specific unit name that is set.
    ///
    /// Sub-department wins over department, which wins over the unit itself.
    pub fn most_specific_unit_name(&self) -> &str {
        if self.sub_department.is_set() {
            &self.sub_department.name
        } else if self.department.is_set() {
            &self.department.name
        } else {
            &self.unit.name
        }
    }
}

/// One entry of the rank history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankHistoryEntry {
    /// Rank grade string such as "III/a".
    #[serde(rename = "golonganRuang", default, deserialize_with = "null_as_default")]
    pub rank_grade: String,
}

/// An active employee as returned by the HR roster.
///
/// # Example
///
/// ```
/// use position_snapshot::models::EmployeeRecord;
///
/// let json = r#"{
///     "id": "198501012010011001",
///     "nama": "Siti Rahma",
///     "jenisJabatan": "FUN",
///     "statusPegawai": {"id": 1, "nama": "PNS"},
///     "jabatanSaatIni": null,
///     "unitKerjaSaatIni": [],
///     "riwayatPangkat": [{"golonganRuang": "III/b"}]
/// }"#;
///
/// let employee: EmployeeRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(employee.latest_rank_grade(), Some("III/b"));
/// assert!(employee.current_position.level.name.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Employee identifier (civil service number).
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Full name.
    #[serde(rename = "nama", default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Job classification code (e.g. "DT", "FUN").
    #[serde(rename = "jenisJabatan", default, deserialize_with = "null_as_default")]
    pub job_classification: String,
    /// Employment status.
    #[serde(rename = "statusPegawai", default, deserialize_with = "null_as_default")]
    pub status: EmploymentStatus,
    /// Current position descriptor.
    #[serde(rename = "jabatanSaatIni", default, deserialize_with = "null_as_default")]
    pub current_position: CurrentPosition,
    /// Organizational-unit assignments, in the order the roster returned them.
    #[serde(rename = "unitKerjaSaatIni", default, deserialize_with = "null_as_default")]
    pub unit_assignments: Vec<UnitAssignment>,
    /// Unit responsible for salary payment.
    #[serde(rename = "unitGaji", default, deserialize_with = "null_as_default")]
    pub payroll_unit: NamedRef,
    /// Unit responsible for remuneration payment.
    #[serde(rename = "unitRemun", default, deserialize_with = "null_as_default")]
    pub remuneration_unit: NamedRef,
    /// Rank history, most recent first.
    #[serde(rename = "riwayatPangkat", default, deserialize_with = "null_as_default")]
    pub rank_history: Vec<RankHistoryEntry>,
}

impl EmployeeRecord {
    /// Returns the most recent rank grade, if the employee has any rank history.
    pub fn latest_rank_grade(&self) -> Option<&str> {
        self.rank_history.first().map(|entry| entry.rank_grade.as_str())
    }

    /// Returns the first organizational-unit assignment that is not secondary.
    pub fn primary_assignment(&self) -> Option<&UnitAssignment> {
        self.unit_assignments.iter().find(|a| !a.is_secondary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_employee() {
        let json = r#"{
            "id": "197001011995031001",
            "nama": "Budi Santoso",
            "statusPegawai": {"id": 1, "nama": "PNS"},
            "jabatanSaatIni": {
                "id": "jab-1",
                "level": {
                    "id": "lvl-7",
                    "nama": "Lektor",
                    "ssoRole": {"code": "DSN", "description": "Dosen"},
                    "jabatan": {"id": "FUN", "nama": "Dosen"}
                },
                "sublevel": {"id": "sub-2", "nama": "Madya"},
                "grade": {"id": "G12", "remun": 2100}
            },
            "unitKerjaSaatIni": [{
                "id": "uk-1",
                "unitKerja": {"id": "u1", "nama": "Fakultas Teknik"},
                "bagian": {"id": "", "nama": ""},
                "subbag": null,
                "posisi": {"id": "p1", "nama": "Kepala"},
                "grade": {"id": "G10", "remun": 1800},
                "isSecondary": false
            }],
            "jenisJabatan": "FUN",
            "unitGaji": {"id": "UG01", "nama": "Pusat"},
            "unitRemun": {"id": "UR01", "nama": "Pusat"},
            "riwayatPangkat": [{"golonganRuang": "IV/a"}, {"golonganRuang": "III/d"}]
        }"#;

        let employee: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "197001011995031001");
        assert_eq!(employee.status.id, 1);
        assert_eq!(employee.current_position.level.sso_role.code, "DSN");
        assert_eq!(employee.current_position.level.job_title.id, "FUN");
        assert_eq!(employee.current_position.sub_level.name, "Madya");
        assert_eq!(employee.current_position.grade.remuneration_points, 2100);
        assert_eq!(employee.unit_assignments.len(), 1);
        assert!(!employee.unit_assignments[0].sub_department.is_set());
        assert_eq!(employee.payroll_unit.id, "UG01");
        assert_eq!(employee.latest_rank_grade(), Some("IV/a"));
    }

    #[test]
    fn test_nulls_decode_as_zero_values() {
        let json = r#"{
            "id": "1",
            "nama": null,
            "statusPegawai": null,
            "jabatanSaatIni": {"level": null, "sublevel": null, "grade": null},
            "unitKerjaSaatIni": null,
            "jenisJabatan": null,
            "unitGaji": null,
            "unitRemun": null,
            "riwayatPangkat": null
        }"#;

        let employee: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(employee.name, "");
        assert_eq!(employee.status, EmploymentStatus::default());
        assert_eq!(employee.current_position, CurrentPosition::default());
        assert!(employee.unit_assignments.is_empty());
        assert_eq!(employee.job_classification, "");
        assert!(employee.rank_history.is_empty());
        assert_eq!(employee.latest_rank_grade(), None);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let employee: EmployeeRecord = serde_json::from_str(r#"{"id": "2"}"#).unwrap();
        assert_eq!(employee.id, "2");
        assert_eq!(employee.status.id, 0);
        assert!(employee.primary_assignment().is_none());
    }

    #[test]
    fn test_primary_assignment_skips_secondary_entries() {
        let employee = EmployeeRecord {
            unit_assignments: vec![
                UnitAssignment {
                    id: "secondary".to_string(),
                    is_secondary: true,
                    ..Default::default()
                },
                UnitAssignment {
                    id: "primary".to_string(),
                    ..Default::default()
                },
                UnitAssignment {
                    id: "later".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        assert_eq!(employee.primary_assignment().unwrap().id, "primary");
    }

    fn named(id: &str, name: &str) -> NamedRef {
        NamedRef {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_most_specific_unit_prefers_sub_department() {
        let assignment = UnitAssignment {
            unit: named("u", "Rektorat"),
            department: named("b", "Bagian Keuangan"),
            sub_department: named("s", "Subbag Gaji"),
            ..Default::default()
        };
        assert_eq!(assignment.most_specific_unit_name(), "Subbag Gaji");
    }

    #[test]
    fn test_most_specific_unit_falls_back_to_department_then_unit() {
        let mut assignment = UnitAssignment {
            unit: named("u", "Rektorat"),
            department: named("b", "Bagian Keuangan"),
            sub_department: named("", "ignored without id"),
            ..Default::default()
        };
        assert_eq!(assignment.most_specific_unit_name(), "Bagian Keuangan");

        assignment.department = named("", "ignored without id");
        assert_eq!(assignment.most_specific_unit_name(), "Rektorat");
    }
}
