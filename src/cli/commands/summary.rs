use crate::collector::{Collector, SummaryOutcome};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};
use chrono::Local;

/// Handle the `summary` command: one aggregate-count cycle for the target room.
pub fn handle(cfg: &Config) -> AppResult<()> {
    header(format!("Seat collection started ({})", Local::now()));

    let log = cfg.summary_log_path();
    let collector = Collector::new(cfg.clone())?;

    match collector.run_summary(&log)? {
        SummaryOutcome::Appended(snapshot) => {
            success(format!(
                "'{}' summary collected (available: {})",
                snapshot.room_name, snapshot.available
            ));
            success(format!("1 row saved to {}", log.display()));
        }
        SummaryOutcome::NotFound => {
            warning(format!(
                "Room id {} not found in the API response",
                cfg.target_room.id
            ));
            info("No new data collected.");
        }
    }

    Ok(())
}
