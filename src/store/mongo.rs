//! MongoDB-backed snapshot sink and reference tables.

use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection};
use tracing::{debug, info};

use crate::config::StoreSettings;
use crate::error::{SnapshotError, SnapshotResult};
use crate::lookup::ReferenceLookup;
use crate::models::{
    MealAllowance, Period, RemunFilter, RemunerationRate, SnapshotRecord, TaxRate,
};

use super::SnapshotSink;

/// Handles to the snapshot collection and the three reference collections.
#[derive(Debug, Clone)]
pub struct MongoStore {
    snapshots: Collection<SnapshotRecord>,
    remuneration: Collection<RemunerationRate>,
    tax: Collection<TaxRate>,
    meal_allowance: Collection<MealAllowance>,
}

impl MongoStore {
    /// Connects to the configured database and verifies it answers a ping.
    pub async fn connect(settings: &StoreSettings) -> SnapshotResult<Self> {
        info!(database = %settings.database, "Connecting to document store");
        let client = Client::with_uri_str(&settings.uri)
            .await
            .map_err(|e| SnapshotError::store("connect", e))?;

        let database = client.database(&settings.database);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| SnapshotError::store("ping", e))?;

        Ok(Self {
            snapshots: database.collection(&settings.snapshot_collection),
            remuneration: database.collection(&settings.remuneration_collection),
            tax: database.collection(&settings.tax_collection),
            meal_allowance: database.collection(&settings.meal_allowance_collection),
        })
    }
}

/// Builds the store query for a remuneration filter.
pub(crate) fn remun_filter_document(filter: &RemunFilter) -> Document {
    match filter {
        RemunFilter::StatusOnly { status_id } => doc! { "statusPegawaiId": *status_id },
        RemunFilter::StatusAndClassification {
            status_id,
            job_classification,
        } => doc! {
            "statusPegawaiId": *status_id,
            "jenisJabatan": job_classification.as_str(),
        },
    }
}

/// Builds the store query selecting every snapshot of a period.
pub(crate) fn period_filter_document(period: Period) -> Document {
    doc! { "tahun": period.year, "bulan": period.month }
}

impl ReferenceLookup for MongoStore {
    async fn tax_rate(&self, rank_group: &str) -> SnapshotResult<Option<TaxRate>> {
        self.tax
            .find_one(doc! { "golongan": rank_group })
            .await
            .map_err(|e| SnapshotError::store("find_one tax", e))
    }

    async fn meal_allowance(&self, rank_group: &str) -> SnapshotResult<Option<MealAllowance>> {
        self.meal_allowance
            .find_one(doc! { "golongan": rank_group })
            .await
            .map_err(|e| SnapshotError::store("find_one meal allowance", e))
    }

    async fn remuneration_rate(
        &self,
        filter: &RemunFilter,
    ) -> SnapshotResult<Option<RemunerationRate>> {
        debug!(%filter, "Looking up remuneration implementation rate");
        self.remuneration
            .find_one(remun_filter_document(filter))
            .await
            .map_err(|e| SnapshotError::store("find_one remuneration", e))
    }
}

impl SnapshotSink for MongoStore {
    async fn delete_period(&self, period: Period) -> SnapshotResult<u64> {
        let result = self
            .snapshots
            .delete_many(period_filter_document(period))
            .await
            .map_err(|e| SnapshotError::store("delete_many", e))?;
        Ok(result.deleted_count)
    }

    async fn insert_snapshots(&self, records: &[SnapshotRecord]) -> SnapshotResult<u64> {
        let result = self
            .snapshots
            .insert_many(records)
            .await
            .map_err(|e| SnapshotError::store("insert_many", e))?;
        Ok(result.inserted_ids.len() as u64)
    }
}
