//! In-memory reference tables.

use crate::error::SnapshotResult;
use crate::models::{MealAllowance, RemunFilter, RemunerationRate, TaxRate};

use super::ReferenceLookup;

/// Reference tables held in memory.
///
/// Rows are matched in insertion order and the first match wins, the same
/// way a single-document find resolves against a collection.
///
/// # Example
///
/// ```
/// use position_snapshot::lookup::InMemoryReferenceTables;
///
/// let tables = InMemoryReferenceTables::new()
///     .with_tax("III", 5)
///     .with_meal_allowance("III", 37000)
///     .with_remuneration(1, "DT", 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryReferenceTables {
    tax: Vec<TaxRate>,
    meal_allowance: Vec<MealAllowance>,
    remuneration: Vec<RemunerationRate>,
}

impl InMemoryReferenceTables {
    /// Creates empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tax row.
    pub fn with_tax(mut self, rank_group: &str, percent: i32) -> Self {
        self.tax.push(TaxRate {
            rank_group: rank_group.to_string(),
            percent,
        });
        self
    }

    /// Adds a meal allowance row.
    pub fn with_meal_allowance(mut self, rank_group: &str, amount: i32) -> Self {
        self.meal_allowance.push(MealAllowance {
            rank_group: rank_group.to_string(),
            amount,
        });
        self
    }

    /// Adds a remuneration implementation row for a status and job classification.
    pub fn with_remuneration(mut self, status_id: i32, job_classification: &str, percent: i32) -> Self {
        self.remuneration.push(RemunerationRate {
            status_id,
            status_name: String::new(),
            job_classification: job_classification.to_string(),
            percent,
        });
        self
    }

    /// Adds a remuneration implementation row that carries no job classification.
    pub fn with_remuneration_for_status(self, status_id: i32, percent: i32) -> Self {
        self.with_remuneration(status_id, "", percent)
    }
}

impl ReferenceLookup for InMemoryReferenceTables {
    async fn tax_rate(&self, rank_group: &str) -> SnapshotResult<Option<TaxRate>> {
        Ok(self.tax.iter().find(|row| row.rank_group == rank_group).cloned())
    }

    async fn meal_allowance(&self, rank_group: &str) -> SnapshotResult<Option<MealAllowance>> {
        Ok(self
            .meal_allowance
            .iter()
            .find(|row| row.rank_group == rank_group)
            .cloned())
    }

    async fn remuneration_rate(
        &self,
        filter: &RemunFilter,
    ) -> SnapshotResult<Option<RemunerationRate>> {
        Ok(self.remuneration.iter().find(|row| filter.matches(row)).cloned())
    }
}
