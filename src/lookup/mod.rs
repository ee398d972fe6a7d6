//! Reference lookup gateway.
//!
//! This module resolves an employee's tax percentage, daily meal allowance
//! and remuneration implementation percentage from the three reference
//! tables. The tables themselves sit behind the [`ReferenceLookup`] trait so
//! the same rules run against the document store or an in-memory copy.
//!
//! Tax and meal allowance misses are tolerated and default to zero. A
//! remuneration implementation miss aborts the run.

mod memory;

use std::future::Future;

use tracing::debug;

use crate::error::{SnapshotError, SnapshotResult};
use crate::models::{EmployeeRecord, MealAllowance, RemunFilter, RemunerationRate, TaxRate};
use crate::resolution::{rank_group_prefix, select_remun_filter};

pub use memory::InMemoryReferenceTables;

/// Point lookups against the three reference tables.
///
/// Implementations return `Ok(None)` when no row matches and reserve `Err`
/// for failures of the underlying store.
pub trait ReferenceLookup {
    /// Finds the tax row for a rank group.
    fn tax_rate(
        &self,
        rank_group: &str,
    ) -> impl Future<Output = SnapshotResult<Option<TaxRate>>> + Send;

    /// Finds the meal allowance row for a rank group.
    fn meal_allowance(
        &self,
        rank_group: &str,
    ) -> impl Future<Output = SnapshotResult<Option<MealAllowance>>> + Send;

    /// Finds the first remuneration implementation row matching a filter.
    fn remuneration_rate(
        &self,
        filter: &RemunFilter,
    ) -> impl Future<Output = SnapshotResult<Option<RemunerationRate>>> + Send;
}

/// The reference values resolved for one employee.
///
/// Computed once per employee and shared by both of its snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompensationRates {
    /// Rank group prefix of the most recent rank grade; empty without rank history.
    pub rank_group: String,
    /// Tax percentage, zero when not found.
    pub tax_percent: i32,
    /// Daily meal allowance, zero when not found.
    pub daily_meal_allowance: i32,
    /// Remuneration implementation percentage, zero when not looked up.
    pub remuneration_percent: i32,
}

/// Resolves all reference values for an employee.
///
/// # Arguments
///
/// * `lookup` - The reference tables to query
/// * `employee` - The roster record being enriched
///
/// # Returns
///
/// Returns the resolved [`CompensationRates`], or an error if:
/// - The employee has a job classification and no remuneration
///   implementation row matches its filter (`RemunerationRateNotFound`)
/// - The underlying store fails
///
/// Tax and meal allowance are only looked up when the employee has rank
/// history; the remuneration rate only when the job classification is set.
pub async fn lookup_compensation<L: ReferenceLookup>(
    lookup: &L,
    employee: &EmployeeRecord,
) -> SnapshotResult<CompensationRates> {
    let mut rates = CompensationRates::default();

    if let Some(rank_grade) = employee.latest_rank_grade() {
        let rank_group = rank_group_prefix(rank_grade);

        match lookup.tax_rate(rank_group).await? {
            Some(tax) => rates.tax_percent = tax.percent,
            None => debug!(employee_id = %employee.id, rank_group, "No tax row, using zero"),
        }
        match lookup.meal_allowance(rank_group).await? {
            Some(meal) => rates.daily_meal_allowance = meal.amount,
            None => debug!(
                employee_id = %employee.id,
                rank_group,
                "No meal allowance row, using zero"
            ),
        }

        rates.rank_group = rank_group.to_string();
    }

    if !employee.job_classification.is_empty() {
        let filter = select_remun_filter(employee);
        let rate = lookup
            .remuneration_rate(&filter)
            .await?
            .ok_or_else(|| SnapshotError::RemunerationRateNotFound {
                filter: filter.to_string(),
            })?;
        rates.remuneration_percent = rate.percent;
    }

    Ok(rates)
}
