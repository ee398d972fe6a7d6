//! Position resolution.
//!
//! This module decides which grade and job title an employee is paid under.
//! Structural officials (and anyone whose level carries the structural SSO
//! role) are paid by their primary organizational-unit assignment; everybody
//! else is paid by their hierarchical level.

use crate::models::{EmployeeRecord, GradeInfo};

/// Job classification code of structural officials.
pub const STRUCTURAL_CLASSIFICATION: &str = "DT";

/// SSO role code that marks a level as structural.
pub const STRUCTURAL_SSO_ROLE: &str = "STR";

/// The rule family used to resolve an employee's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionBranch {
    /// Resolve from the first non-secondary organizational-unit assignment.
    Structural,
    /// Resolve from the level, sub-level and job title of the current position.
    Hierarchical,
}

impl PositionBranch {
    /// Selects the branch that applies to an employee.
    ///
    /// # Examples
    ///
    /// ```
    /// use position_snapshot::models::EmployeeRecord;
    /// use position_snapshot::resolution::PositionBranch;
    ///
    /// let mut employee = EmployeeRecord::default();
    /// assert_eq!(PositionBranch::select(&employee), PositionBranch::Hierarchical);
    ///
    /// employee.job_classification = "DT".to_string();
    /// assert_eq!(PositionBranch::select(&employee), PositionBranch::Structural);
    /// ```
    pub fn select(employee: &EmployeeRecord) -> Self {
        if employee.job_classification == STRUCTURAL_CLASSIFICATION
            || employee.current_position.level.sso_role.code == STRUCTURAL_SSO_ROLE
        {
            Self::Structural
        } else {
            Self::Hierarchical
        }
    }
}

/// The grade, job title and unit an employee is paid under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPosition {
    /// Grade taken from the selected source; never mixed across branches.
    pub grade: GradeInfo,
    /// Job title string as written to the snapshot.
    pub title: String,
    /// Organizational unit name; empty for the hierarchical branch.
    pub unit: String,
}

/// Resolves an employee's position using the branch that applies to them.
///
/// # Examples
///
/// ```
/// use position_snapshot::models::EmployeeRecord;
/// use position_snapshot::resolution::resolve_position;
///
/// let json = r#"{
///     "jenisJabatan": "FUN",
///     "jabatanSaatIni": {
///         "level": {"nama": "Lektor", "jabatan": {"id": "FUN", "nama": "Dosen"}},
///         "sublevel": {"nama": "Madya"},
///         "grade": {"id": "G12", "remun": 2100}
///     }
/// }"#;
/// let employee: EmployeeRecord = serde_json::from_str(json).unwrap();
///
/// let position = resolve_position(&employee);
/// assert_eq!(position.title, "Dosen Lektor Madya");
/// assert_eq!(position.grade.id, "G12");
/// ```
pub fn resolve_position(employee: &EmployeeRecord) -> ResolvedPosition {
    match PositionBranch::select(employee) {
        PositionBranch::Structural => resolve_structural(employee),
        PositionBranch::Hierarchical => resolve_hierarchical(employee),
    }
}

/// Resolves a position from the employee's primary organizational-unit assignment.
///
/// The first assignment whose secondary flag is false is used. The title is
/// the assignment's position name followed by the most specific unit name.
/// Without such an assignment the result stays empty; there is no fallback to
/// the hierarchical fields.
pub fn resolve_structural(employee: &EmployeeRecord) -> ResolvedPosition {
    let Some(assignment) = employee.primary_assignment() else {
        return ResolvedPosition::default();
    };

    let unit = assignment.most_specific_unit_name().to_string();
    ResolvedPosition {
        grade: assignment.grade.clone(),
        title: format!("{} {}", assignment.position.name, unit),
        unit,
    }
}

/// Resolves a position from the employee's hierarchical level.
///
/// The title joins job title, level and sub-level names with single spaces.
/// Empty components still contribute their separator, so the shape of the
/// string is stable regardless of which parts are filled in.
pub fn resolve_hierarchical(employee: &EmployeeRecord) -> ResolvedPosition {
    let position = &employee.current_position;
    ResolvedPosition {
        grade: position.grade.clone(),
        title: format!(
            "{} {} {}",
            position.level.job_title.name, position.level.name, position.sub_level.name
        ),
        unit: String::new(),
    }
}
