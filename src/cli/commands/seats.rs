use crate::cli::parser::Commands;
use crate::collector::Collector;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Room;
use crate::ui::messages::{header, info, success, warning};
use chrono::Local;

/// Handle the `seats` command: per-seat collection over the configured rooms.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Seats { rooms } = cmd {
        let selected = select_rooms(cfg, rooms)?;
        if selected.is_empty() {
            warning("No rooms configured.");
            return Ok(());
        }

        header(format!("Seat collection started ({})", Local::now()));

        let log = cfg.seats_log_path();
        let collector = Collector::new(cfg.clone())?;
        let report = collector.run_seats(&selected, &log)?;

        if !report.failures.is_empty() {
            warning(format!(
                "{} of {} room(s) skipped",
                report.failures.len(),
                selected.len()
            ));
        }

        if report.written == 0 {
            info("No new data collected.");
        } else {
            success(format!(
                "{} row(s) saved to {}",
                report.written,
                log.display()
            ));
        }
    }

    Ok(())
}

/// Configured rooms, optionally narrowed to `ids` (in configuration order).
fn select_rooms(cfg: &Config, ids: &[i64]) -> AppResult<Vec<Room>> {
    if ids.is_empty() {
        return Ok(cfg.rooms.clone());
    }

    if let Some(unknown) = ids.iter().find(|id| !cfg.rooms.iter().any(|r| r.id == **id)) {
        return Err(AppError::Config(format!(
            "room id {unknown} is not in the configured rooms"
        )));
    }

    Ok(cfg
        .rooms
        .iter()
        .filter(|r| ids.contains(&r.id))
        .cloned()
        .collect())
}
