//! Settings loading.
//!
//! Settings come from the process environment, optionally seeded from a
//! `.env` file in the working directory. The parsing itself runs over a
//! plain key lookup so it can be exercised without touching the environment.

use std::str::FromStr;

use crate::error::{SnapshotError, SnapshotResult};

use super::types::{
    DEFAULT_DATABASE, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_LOG_DIR, DEFAULT_LOG_FILE_PREFIX,
    DEFAULT_MEAL_ALLOWANCE_COLLECTION, DEFAULT_REMUNERATION_COLLECTION,
    DEFAULT_SNAPSHOT_COLLECTION, DEFAULT_TAX_COLLECTION, LogFormat, LogSettings, RosterSettings,
    Settings, StoreSettings,
};

impl Settings {
    /// Loads settings from the environment, reading `.env` first if present.
    ///
    /// Variables already set in the environment take precedence over the file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use position_snapshot::config::Settings;
    ///
    /// let settings = Settings::from_env()?;
    /// println!("Writing to {}", settings.store.snapshot_collection);
    /// # Ok::<(), position_snapshot::error::SnapshotError>(())
    /// ```
    pub fn from_env() -> SnapshotResult<Self> {
        // A missing .env file is normal in production.
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings from an arbitrary key lookup.
    ///
    /// # Returns
    ///
    /// Returns the settings, or an error if:
    /// - `SIMPEG_GRAPHQL_URL`, `SIMPEG_GRAPHQL_APIKEY` or `MONGODB_URI` is
    ///   missing or blank (`ConfigMissing`)
    /// - A numeric, boolean or enumerated value cannot be parsed (`ConfigInvalid`)
    pub fn from_lookup<F>(lookup: F) -> SnapshotResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| non_blank(&lookup, key);
        let required = |key: &str| {
            get(key).ok_or_else(|| SnapshotError::ConfigMissing {
                key: key.to_string(),
            })
        };
        let or_default = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let roster = RosterSettings {
            url: required("SIMPEG_GRAPHQL_URL")?,
            api_key: required("SIMPEG_GRAPHQL_APIKEY")?,
            active_status_ids: match get("ROSTER_ACTIVE_STATUS_IDS") {
                Some(raw) => parse_list("ROSTER_ACTIVE_STATUS_IDS", &raw)?,
                None => vec![1],
            },
            page_size: get("ROSTER_PAGE_SIZE")
                .map(|raw| parse_number("ROSTER_PAGE_SIZE", &raw))
                .transpose()?,
            timeout_secs: get("HTTP_TIMEOUT_SECS")
                .map(|raw| parse_number("HTTP_TIMEOUT_SECS", &raw))
                .transpose()?
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        if roster.page_size == Some(0) {
            return Err(SnapshotError::ConfigInvalid {
                key: "ROSTER_PAGE_SIZE".to_string(),
                message: "page size must be greater than zero".to_string(),
            });
        }

        let store = StoreSettings {
            uri: required("MONGODB_URI")?,
            database: or_default("MONGODB_DATABASE", DEFAULT_DATABASE),
            snapshot_collection: or_default("SNAPSHOT_COLLECTION", DEFAULT_SNAPSHOT_COLLECTION),
            remuneration_collection: or_default(
                "REMUNERATION_COLLECTION",
                DEFAULT_REMUNERATION_COLLECTION,
            ),
            tax_collection: or_default("TAX_COLLECTION", DEFAULT_TAX_COLLECTION),
            meal_allowance_collection: or_default(
                "MEAL_ALLOWANCE_COLLECTION",
                DEFAULT_MEAL_ALLOWANCE_COLLECTION,
            ),
        };

        let log = LogSettings::from_lookup(&lookup)?;

        let replace_current_period = match get("REPLACE_CURRENT_PERIOD") {
            Some(raw) => parse_bool("REPLACE_CURRENT_PERIOD", &raw)?,
            None => false,
        };

        Ok(Self {
            roster,
            store,
            log,
            replace_current_period,
        })
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            directory: DEFAULT_LOG_DIR.to_string(),
            file_prefix: DEFAULT_LOG_FILE_PREFIX.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LogSettings {
    /// Loads only the log settings from the environment, reading `.env`
    /// first if present.
    ///
    /// The binary calls this before the full [`Settings`] so that a
    /// configuration error still reaches the log file.
    pub fn from_env() -> SnapshotResult<Self> {
        let _ = dotenv::dotenv();
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    /// Loads the log settings from an arbitrary key lookup.
    ///
    /// Unset keys fall back to [`LogSettings::default`]; an unknown
    /// `LOG_FORMAT` is a `ConfigInvalid` error.
    pub fn from_lookup<F>(lookup: &F) -> SnapshotResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            directory: non_blank(lookup, "LOG_DIR").unwrap_or(defaults.directory),
            file_prefix: non_blank(lookup, "LOG_FILE_PREFIX").unwrap_or(defaults.file_prefix),
            format: match non_blank(lookup, "LOG_FORMAT") {
                Some(raw) => parse_log_format(&raw)?,
                None => defaults.format,
            },
        })
    }
}

/// Returns the trimmed value of `key`, treating blank values as unset.
fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_number<T: FromStr>(key: &str, raw: &str) -> SnapshotResult<T> {
    raw.parse().map_err(|_| SnapshotError::ConfigInvalid {
        key: key.to_string(),
        message: format!("expected a whole number, got '{raw}'"),
    })
}

fn parse_list(key: &str, raw: &str) -> SnapshotResult<Vec<i32>> {
    let ids = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| parse_number(key, part))
        .collect::<SnapshotResult<Vec<i32>>>()?;

    if ids.is_empty() {
        return Err(SnapshotError::ConfigInvalid {
            key: key.to_string(),
            message: "expected at least one status id".to_string(),
        });
    }
    Ok(ids)
}

fn parse_bool(key: &str, raw: &str) -> SnapshotResult<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SnapshotError::ConfigInvalid {
            key: key.to_string(),
            message: format!("expected true or false, got '{raw}'"),
        }),
    }
}

fn parse_log_format(raw: &str) -> SnapshotResult<LogFormat> {
    match raw.to_ascii_lowercase().as_str() {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        _ => Err(SnapshotError::ConfigInvalid {
            key: "LOG_FORMAT".to_string(),
            message: format!("expected 'text' or 'json', got '{raw}'"),
        }),
    }
}
