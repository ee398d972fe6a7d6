//! The per-employee, per-period snapshot document.
//!
//! Document keys match the `jabatanBulanan` collection. Empty strings and
//! zero numbers are left out of the stored document, except for the identity,
//! period and tax fields which are always written.

use serde::{Deserialize, Serialize};

use super::Period;

fn is_zero(value: &i32) -> bool {
    *value == 0
}

/// One employee's derived payroll attributes for one period.
///
/// Snapshots are built once, never mutated, and written in a single bulk
/// insert per period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotRecord {
    /// Employee identifier.
    #[serde(rename = "nip")]
    pub employee_id: String,
    /// Employee name.
    #[serde(rename = "nama")]
    pub name: String,
    /// Rank group prefix of the most recent rank grade.
    #[serde(rename = "golongan", skip_serializing_if = "String::is_empty")]
    pub rank_group: String,
    /// Employment status id.
    #[serde(rename = "idStatusPegawai", skip_serializing_if = "is_zero")]
    pub status_id: i32,
    /// Employment status name.
    #[serde(rename = "namaStatusPegawai", skip_serializing_if = "String::is_empty")]
    pub status_name: String,
    /// Job classification code.
    #[serde(rename = "jenisJabatan", skip_serializing_if = "String::is_empty")]
    pub job_classification: String,
    /// Payroll unit id.
    #[serde(rename = "unitGaji", skip_serializing_if = "String::is_empty")]
    pub payroll_unit_id: String,
    /// Remuneration unit id.
    #[serde(rename = "unitRemun", skip_serializing_if = "String::is_empty")]
    pub remuneration_unit_id: String,
    /// Resolved grade id.
    #[serde(rename = "grade", skip_serializing_if = "String::is_empty")]
    pub grade_id: String,
    /// Resolved remuneration points.
    #[serde(rename = "remunGrade", skip_serializing_if = "is_zero")]
    pub remuneration_points: i32,
    /// Resolved job title.
    #[serde(rename = "jabatan", skip_serializing_if = "String::is_empty")]
    pub job_title: String,
    /// Period year.
    #[serde(rename = "tahun")]
    pub year: i32,
    /// Period month, 1 through 12.
    #[serde(rename = "bulan")]
    pub month: i32,
    /// Remuneration implementation percentage.
    #[serde(rename = "implementasiRemun", skip_serializing_if = "is_zero")]
    pub remuneration_percent: i32,
    /// Tax percentage.
    #[serde(rename = "pajak")]
    pub tax_percent: i32,
    /// Daily meal allowance.
    #[serde(rename = "uangMakanHarian", skip_serializing_if = "is_zero")]
    pub daily_meal_allowance: i32,
}

impl SnapshotRecord {
    /// Returns the period this snapshot belongs to.
    pub fn period(&self) -> Period {
        Period::new(self.year, self.month)
    }
}
