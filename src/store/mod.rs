//! Snapshot persistence.
//!
//! This module defines the output sink a run writes to and the MongoDB
//! implementation that also serves the reference tables.

mod mongo;

use std::future::Future;

use crate::error::SnapshotResult;
use crate::models::{Period, SnapshotRecord};

pub use mongo::MongoStore;

/// A collection of snapshot documents.
pub trait SnapshotSink {
    /// Deletes every snapshot stamped with `period`, returning how many were removed.
    fn delete_period(&self, period: Period) -> impl Future<Output = SnapshotResult<u64>> + Send;

    /// Inserts snapshots in one bulk write, returning how many were inserted.
    fn insert_snapshots(
        &self,
        records: &[SnapshotRecord],
    ) -> impl Future<Output = SnapshotResult<u64>> + Send;
}
