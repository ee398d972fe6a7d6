//! Tracing subscriber setup.
//!
//! Runs log to a daily file named `<prefix>_<year><month><day>.log` (no zero
//! padding) in the configured directory, appending when the job runs more
//! than once a day. If the file cannot be opened, logs go to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{Datelike, NaiveDate};
use tracing::warn;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LogFormat, LogSettings};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "position_snapshot=info";

/// Returns the log file name for a run on `date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use position_snapshot::telemetry::log_file_name;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
/// assert_eq!(log_file_name("profiljabatanbulanan", date), "profiljabatanbulanan_202637.log");
/// ```
pub fn log_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}_{}{}{}.log", date.year(), date.month(), date.day())
}

/// Installs the global tracing subscriber.
///
/// Returns the path of the log file in use, or `None` when logging fell back
/// to stderr. Must be called at most once per process.
pub fn init_tracing(settings: &LogSettings, date: NaiveDate) -> Option<PathBuf> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let path = PathBuf::from(&settings.directory).join(log_file_name(&settings.file_prefix, date));
    let opened = OpenOptions::new().create(true).append(true).open(&path);

    let (writer, log_path, open_error) = match opened {
        Ok(file) => (BoxMakeWriter::new(Mutex::new(file)), Some(path.clone()), None),
        Err(e) => (BoxMakeWriter::new(std::io::stderr), None, Some(e)),
    };

    match settings.format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .init();
        }
    }

    if let Some(e) = open_error {
        warn!(path = %path.display(), error = %e, "Cannot open log file, logging to stderr");
    }

    log_path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name_has_no_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(log_file_name("run", date), "run_202615.log");
    }

    #[test]
    fn test_log_file_name_with_two_digit_parts() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(
            log_file_name("profiljabatanbulanan", date),
            "profiljabatanbulanan_20261016.log"
        );
    }
}
