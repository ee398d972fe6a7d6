//! Reference table rows and lookup keys.
//!
//! The three reference tables are read-only during a run. Tax and meal
//! allowance rows are keyed by rank group; remuneration implementation rows
//! are keyed by employment status and, usually, job classification.

use std::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Decodes a whole number stored as a 32-bit, 64-bit or integral floating
/// point value. A null decodes to zero.
fn whole_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    struct WholeNumber;

    impl<'de> Visitor<'de> for WholeNumber {
        type Value = i32;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a whole number that fits in 32 bits")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
            i32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
            i32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i32, E> {
            if v.fract() == 0.0 && v >= f64::from(i32::MIN) && v <= f64::from(i32::MAX) {
                Ok(v as i32)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }

        fn visit_none<E: de::Error>(self) -> Result<i32, E> {
            Ok(0)
        }

        fn visit_unit<E: de::Error>(self) -> Result<i32, E> {
            Ok(0)
        }
    }

    deserializer.deserialize_any(WholeNumber)
}

/// A row of the tax table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate {
    /// Rank group prefix (e.g. "III").
    #[serde(rename = "golongan", default)]
    pub rank_group: String,
    /// Tax percentage.
    #[serde(rename = "persen", default, deserialize_with = "whole_number")]
    pub percent: i32,
}

/// A row of the meal allowance table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealAllowance {
    /// Rank group prefix (e.g. "III").
    #[serde(rename = "golongan", default)]
    pub rank_group: String,
    /// Daily meal allowance amount.
    #[serde(rename = "jumlah", default, deserialize_with = "whole_number")]
    pub amount: i32,
}

/// A row of the remuneration implementation table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemunerationRate {
    /// Employment status the row applies to.
    #[serde(rename = "statusPegawaiId", default, deserialize_with = "whole_number")]
    pub status_id: i32,
    /// Employment status display name.
    #[serde(rename = "statusPegawaiNama", default)]
    pub status_name: String,
    /// Job classification the row applies to.
    #[serde(rename = "jenisJabatan", default)]
    pub job_classification: String,
    /// Implementation percentage.
    #[serde(rename = "persen", default, deserialize_with = "whole_number")]
    pub percent: i32,
}

/// The key used to find an employee's remuneration implementation rate.
///
/// # Example
///
/// ```
/// use position_snapshot::models::RemunFilter;
///
/// let filter = RemunFilter::StatusAndClassification {
///     status_id: 1,
///     job_classification: "Cados".to_string(),
/// };
/// assert_eq!(filter.to_string(), r#"{statusPegawaiId: 1, jenisJabatan: "Cados"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RemunFilter {
    /// Match on employment status alone; job classification is ignored.
    StatusOnly {
        /// Employment status id.
        status_id: i32,
    },
    /// Match on employment status and job classification together.
    StatusAndClassification {
        /// Employment status id.
        status_id: i32,
        /// Job classification code.
        job_classification: String,
    },
}

impl RemunFilter {
    /// Returns the status id this filter matches.
    pub fn status_id(&self) -> i32 {
        match self {
            Self::StatusOnly { status_id } | Self::StatusAndClassification { status_id, .. } => {
                *status_id
            }
        }
    }

    /// Returns the job classification this filter matches, if it constrains one.
    pub fn job_classification(&self) -> Option<&str> {
        match self {
            Self::StatusOnly { .. } => None,
            Self::StatusAndClassification {
                job_classification, ..
            } => Some(job_classification),
        }
    }

    /// Returns true if the given row satisfies this filter.
    pub fn matches(&self, rate: &RemunerationRate) -> bool {
        rate.status_id == self.status_id()
            && self
                .job_classification()
                .is_none_or(|classification| rate.job_classification == classification)
    }
}

impl fmt::Display for RemunFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StatusOnly { status_id } => write!(f, "{{statusPegawaiId: {status_id}}}"),
            Self::StatusAndClassification {
                status_id,
                job_classification,
            } => write!(
                f,
                "{{statusPegawaiId: {status_id}, jenisJabatan: {job_classification:?}}}"
            ),
        }
    }
}
