//! Runs one monthly snapshot pass and exits.

use std::process::ExitCode;

use chrono::Local;
use tracing::{error, info};

use position_snapshot::config::{LogSettings, Settings};
use position_snapshot::error::SnapshotResult;
use position_snapshot::models::RunContext;
use position_snapshot::pipeline::{RunOptions, RunSummary, run};
use position_snapshot::roster::HrRosterClient;
use position_snapshot::store::MongoStore;
use position_snapshot::telemetry::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    let today = Local::now().date_naive();

    // An invalid LOG_FORMAT is reported by Settings::from_env below.
    let log_settings = LogSettings::from_env().unwrap_or_default();
    if let Some(path) = init_tracing(&log_settings, today) {
        println!("Logging to {}", path.display());
    }

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "Configuration rejected");
            eprintln!("position-snapshot: {e}");
            return ExitCode::FAILURE;
        }
    };

    match execute(settings, RunContext::from_date(today)).await {
        Ok(summary) => {
            println!(
                "Processed {} employees: {} previous-period and {} current-period snapshots written",
                summary.employees, summary.inserted_previous, summary.inserted_current
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Snapshot run aborted");
            eprintln!("position-snapshot: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn execute(settings: Settings, context: RunContext) -> SnapshotResult<RunSummary> {
    let store = MongoStore::connect(&settings.store).await?;
    info!("Document store connected");

    let roster = HrRosterClient::new(settings.roster)?;
    let options = RunOptions {
        replace_current_period: settings.replace_current_period,
    };

    run(&roster, &store, &store, context, options).await
}
