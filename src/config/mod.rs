//! Configuration loading for the snapshot job.
//!
//! This module provides the [`Settings`] a run needs: the roster endpoint
//! and credentials, the document store location and collection names, and
//! the log destination.
//!
//! # Example
//!
//! ```no_run
//! use position_snapshot::config::Settings;
//!
//! let settings = Settings::from_env().unwrap();
//! println!("Roster endpoint: {}", settings.roster.url);
//! ```

mod loader;
mod types;

pub use types::{
    DEFAULT_DATABASE, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_LOG_DIR, DEFAULT_LOG_FILE_PREFIX,
    DEFAULT_MEAL_ALLOWANCE_COLLECTION, DEFAULT_REMUNERATION_COLLECTION,
    DEFAULT_SNAPSHOT_COLLECTION, DEFAULT_TAX_COLLECTION, LogFormat, LogSettings, RosterSettings,
    Settings, StoreSettings,
};
