//! The snapshot run.
//!
//! This module wires the roster paginator, the business rules, the
//! reference lookups and the output sink into one sequential pass:
//!
//! 1. Delete the previous period's snapshots (and, if configured, the
//!    current period's).
//! 2. Page through the roster, enriching each employee in roster order.
//! 3. Bulk insert the previous-period snapshots, then the current-period ones.
//!
//! The first error aborts the run. Snapshots are only written once the whole
//! roster has been processed, so a failure while paging or enriching leaves
//! nothing inserted.

mod assembler;

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::SnapshotResult;
use crate::lookup::{ReferenceLookup, lookup_compensation};
use crate::models::{EmployeeRecord, Period, RunContext, SnapshotRecord};
use crate::resolution::resolve_position;
use crate::roster::{RosterPaginator, RosterSource};
use crate::store::SnapshotSink;

pub use assembler::assemble;

/// The two snapshots produced for one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeSnapshots {
    /// Snapshot stamped with the previous period.
    pub previous: SnapshotRecord,
    /// Snapshot stamped with the current period.
    pub current: SnapshotRecord,
}

/// All snapshots accumulated over a roster, split by period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotBatch {
    /// Previous-period snapshots, in roster order.
    pub previous: Vec<SnapshotRecord>,
    /// Current-period snapshots, in roster order.
    pub current: Vec<SnapshotRecord>,
}

impl SnapshotBatch {
    /// Adds one employee's pair of snapshots.
    pub fn push(&mut self, snapshots: EmployeeSnapshots) {
        self.previous.push(snapshots.previous);
        self.current.push(snapshots.current);
    }

    /// Number of employees in the batch.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Returns true if no employee has been added.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}

/// Options that change what a run deletes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Delete current-period snapshots before inserting new ones.
    pub replace_current_period: bool,
}

/// Counts reported at the end of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Correlation id used in every log line of the run.
    pub run_id: Uuid,
    /// Employees processed.
    pub employees: usize,
    /// Previous-period snapshots deleted before the run.
    pub deleted_previous: u64,
    /// Current-period snapshots deleted before the run.
    pub deleted_current: u64,
    /// Previous-period snapshots inserted.
    pub inserted_previous: u64,
    /// Current-period snapshots inserted.
    pub inserted_current: u64,
}

/// Derives both snapshots of one employee.
///
/// Position and reference values are resolved once and shared by the two
/// periods.
///
/// # Returns
///
/// Returns the pair of snapshots, or `RemunerationRateNotFound` if the
/// employee's remuneration implementation rate cannot be found.
pub async fn enrich_employee<L: ReferenceLookup>(
    lookup: &L,
    employee: &EmployeeRecord,
    context: &RunContext,
) -> SnapshotResult<EmployeeSnapshots> {
    debug!(employee_id = %employee.id, name = %employee.name, "Enriching employee");

    let position = resolve_position(employee);
    let rates = lookup_compensation(lookup, employee).await?;

    Ok(EmployeeSnapshots {
        previous: assemble(employee, &position, &rates, context.previous),
        current: assemble(employee, &position, &rates, context.current),
    })
}

/// Pages through the whole roster and enriches every employee in order.
pub async fn build_snapshots<S, L>(
    source: &S,
    lookup: &L,
    context: &RunContext,
) -> SnapshotResult<SnapshotBatch>
where
    S: RosterSource,
    L: ReferenceLookup,
{
    let mut paginator = RosterPaginator::new(source);
    let mut batch = SnapshotBatch::default();

    while let Some(employees) = paginator.next_page().await? {
        for employee in &employees {
            batch.push(enrich_employee(lookup, employee, context).await?);
        }
        debug!(processed = batch.len(), "Roster page enriched");
    }

    Ok(batch)
}

/// Runs one complete snapshot pass.
///
/// # Arguments
///
/// * `source` - The roster to page through
/// * `lookup` - The reference tables
/// * `sink` - Where snapshots are deleted and inserted
/// * `context` - The previous and current periods, fixed at startup
/// * `options` - Deletion behaviour
///
/// # Returns
///
/// Returns a [`RunSummary`] on success. Any roster, lookup or store error is
/// returned unchanged. The two inserts are independent writes; if the
/// second one fails the first one is not rolled back.
pub async fn run<S, L, K>(
    source: &S,
    lookup: &L,
    sink: &K,
    context: RunContext,
    options: RunOptions,
) -> SnapshotResult<RunSummary>
where
    S: RosterSource,
    L: ReferenceLookup,
    K: SnapshotSink,
{
    let run_id = Uuid::new_v4();
    info!(
        %run_id,
        previous = %context.previous,
        current = %context.current,
        "Starting snapshot run"
    );

    let deleted_previous = delete_period(sink, run_id, context.previous).await?;
    let deleted_current = if options.replace_current_period {
        delete_period(sink, run_id, context.current).await?
    } else {
        0
    };

    let batch = build_snapshots(source, lookup, &context).await?;
    info!(%run_id, employees = batch.len(), "Roster processed");

    let inserted_previous = insert_period(sink, run_id, context.previous, &batch.previous).await?;
    let inserted_current = insert_period(sink, run_id, context.current, &batch.current).await?;

    let summary = RunSummary {
        run_id,
        employees: batch.len(),
        deleted_previous,
        deleted_current,
        inserted_previous,
        inserted_current,
    };
    info!(
        %run_id,
        employees = summary.employees,
        inserted_previous,
        inserted_current,
        "Snapshot run complete"
    );
    Ok(summary)
}

async fn delete_period<K: SnapshotSink>(sink: &K, run_id: Uuid, period: Period) -> SnapshotResult<u64> {
    info!(%run_id, %period, "Deleting existing snapshots");
    let deleted = sink.delete_period(period).await?;
    info!(%run_id, %period, deleted, "Existing snapshots deleted");
    Ok(deleted)
}

async fn insert_period<K: SnapshotSink>(
    sink: &K,
    run_id: Uuid,
    period: Period,
    records: &[SnapshotRecord],
) -> SnapshotResult<u64> {
    if records.is_empty() {
        info!(%run_id, %period, "No snapshots to insert");
        return Ok(0);
    }
    info!(%run_id, %period, count = records.len(), "Inserting snapshots");
    sink.insert_snapshots(records).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::InMemoryReferenceTables;
    use crate::models::{CurrentPosition, EmploymentStatus, Level, NamedRef, RankHistoryEntry, SsoRole};
    use chrono::NaiveDate;

    fn context() -> RunContext {
        RunContext::from_date(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
    }

    fn candidate_lecturer() -> EmployeeRecord {
        EmployeeRecord {
            id: "199001012020121001".to_string(),
            name: "Nur Aini".to_string(),
            job_classification: "FUN".to_string(),
            status: EmploymentStatus {
                id: 1,
                name: "CPNS".to_string(),
            },
            current_position: CurrentPosition {
                level: Level {
                    name: "Calon Dosen Awal".to_string(),
                    sso_role: SsoRole {
                        code: "DSN".to_string(),
                        description: "Dosen".to_string(),
                    },
                    job_title: NamedRef {
                        id: "FUN".to_string(),
                        name: "Dosen".to_string(),
                    },
                    ..Default::default()
                },
                ..Default::default()
            },
            rank_history: vec![RankHistoryEntry {
                rank_grade: "III/b".to_string(),
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_enrich_employee_produces_matching_pair() {
        let tables = InMemoryReferenceTables::new()
            .with_tax("III", 5)
            .with_remuneration(1, "Cados", 80);

        let snapshots = enrich_employee(&tables, &candidate_lecturer(), &context())
            .await
            .unwrap();

        assert_eq!((snapshots.previous.year, snapshots.previous.month), (2026, 9));
        assert_eq!((snapshots.current.year, snapshots.current.month), (2026, 10));
        assert_eq!(snapshots.current.remuneration_percent, 80);
        assert_eq!(snapshots.current.tax_percent, 5);
        assert_eq!(snapshots.current.daily_meal_allowance, 0);
        assert_eq!(snapshots.current.job_title, "Dosen Calon Dosen Awal ");
        assert_eq!(snapshots.previous.job_title, snapshots.current.job_title);
    }

    #[tokio::test]
    async fn test_enrich_employee_propagates_missing_remuneration() {
        let tables = InMemoryReferenceTables::new().with_remuneration(1, "Cafung", 75);
        assert!(
            enrich_employee(&tables, &candidate_lecturer(), &context())
                .await
                .is_err()
        );
    }

    #[test]
    fn test_batch_push_keeps_periods_aligned() {
        let mut batch = SnapshotBatch::default();
        assert!(batch.is_empty());

        batch.push(EmployeeSnapshots {
            previous: SnapshotRecord {
                employee_id: "a".to_string(),
                month: 9,
                ..Default::default()
            },
            current: SnapshotRecord {
                employee_id: "a".to_string(),
                month: 10,
                ..Default::default()
            },
        });

        assert_eq!(batch.len(), 1);
        assert_eq!(batch.previous[0].month, 9);
        assert_eq!(batch.current[0].month, 10);
    }
}
