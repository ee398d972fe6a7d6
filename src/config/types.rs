//! Configuration types for the snapshot job.
//!
//! This module contains the strongly-typed settings a run needs, grouped by
//! the collaborator that consumes them.

/// Default document store database.
pub const DEFAULT_DATABASE: &str = "simpegNew";
/// Default snapshot collection.
pub const DEFAULT_SNAPSHOT_COLLECTION: &str = "jabatanBulanan";
/// Default remuneration implementation collection.
pub const DEFAULT_REMUNERATION_COLLECTION: &str = "besaranRemun";
/// Default tax collection.
pub const DEFAULT_TAX_COLLECTION: &str = "pajak";
/// Default meal allowance collection.
pub const DEFAULT_MEAL_ALLOWANCE_COLLECTION: &str = "uangMakan";
/// Default HTTP timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;
/// Default log file prefix.
pub const DEFAULT_LOG_FILE_PREFIX: &str = "profiljabatanbulanan";
/// Default directory for the daily log file.
pub const DEFAULT_LOG_DIR: &str = ".";

/// Settings for the HR roster endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSettings {
    /// GraphQL endpoint URL.
    pub url: String,
    /// API key sent in the `apikey` header.
    pub api_key: String,
    /// Active-status ids the roster is filtered to.
    pub active_status_ids: Vec<i32>,
    /// Requested page size; `None` leaves it to the server.
    pub page_size: Option<u32>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Settings for the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    /// Connection string.
    pub uri: String,
    /// Database name.
    pub database: String,
    /// Collection receiving snapshots.
    pub snapshot_collection: String,
    /// Remuneration implementation reference collection.
    pub remuneration_collection: String,
    /// Tax reference collection.
    pub tax_collection: String,
    /// Meal allowance reference collection.
    pub meal_allowance_collection: String,
}

/// Output format of the log file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Settings for the run log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Directory the daily log file is written to.
    pub directory: String,
    /// File name prefix; the run date is appended.
    pub file_prefix: String,
    /// Line format.
    pub format: LogFormat,
}

/// Everything a run needs, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// HR roster endpoint.
    pub roster: RosterSettings,
    /// Document store.
    pub store: StoreSettings,
    /// Run log.
    pub log: LogSettings,
    /// Also delete current-period snapshots before inserting them.
    pub replace_current_period: bool,
}
