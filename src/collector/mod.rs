//! The fetch → extract → append cycle.

pub mod extract;
pub mod fetch;

pub use extract::{extract_seats, extract_summary};
pub use fetch::{Fetched, Fetcher};

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::seat::TIMESTAMP_FORMAT;
use crate::models::{Room, SeatRecord, SeatSnapshot};
use crate::store::append_records;
use crate::ui::messages::{success, warning};
use chrono::Local;
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Capture instant shared by every record of one run.
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Result of a summary run.
#[derive(Debug)]
pub enum SummaryOutcome {
    /// The snapshot was appended to the log.
    Appended(SeatSnapshot),
    /// The configured room is not in the response; nothing was written.
    NotFound,
}

/// Result of a per-seat run across several rooms.
#[derive(Debug, Default)]
pub struct RunReport {
    pub records: Vec<SeatRecord>,
    pub failures: Vec<(Room, AppError)>,
    pub written: usize,
}

pub struct Collector {
    cfg: Config,
    fetcher: Fetcher,
}

impl Collector {
    pub fn new(cfg: Config) -> AppResult<Self> {
        let fetcher = Fetcher::new(&cfg)?;
        Ok(Self { cfg, fetcher })
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn fetch(&self, url: &str) -> AppResult<Fetched> {
        self.fetcher.get_json(url)
    }

    /// Fetch the summary endpoint and pick out the configured room.
    pub fn collect_summary(&self, timestamp: &str) -> AppResult<Option<SeatSnapshot>> {
        let fetched = self.fetch(&self.cfg.summary_url)?;
        extract_summary(
            &fetched.json,
            &fetched.body,
            &self.cfg.target_room,
            timestamp,
        )
    }

    /// Fetch and flatten the seat list of one room.
    pub fn collect_room(&self, room: &Room, timestamp: &str) -> AppResult<Vec<SeatRecord>> {
        let fetched = self.fetch(&self.cfg.seat_url_for(room))?;
        extract_seats(&fetched.json, &fetched.body, room, timestamp)
    }

    /// One summary cycle: fetch, extract, append to `log`.
    pub fn run_summary(&self, log: &Path) -> AppResult<SummaryOutcome> {
        let timestamp = now_timestamp();

        let Some(snapshot) = self.collect_summary(&timestamp)? else {
            return Ok(SummaryOutcome::NotFound);
        };

        append_records(std::slice::from_ref(&snapshot), log)?;
        Ok(SummaryOutcome::Appended(snapshot))
    }

    /// Collect every room in `rooms`, pacing requests by the configured
    /// delay, then append the combined batch once.
    ///
    /// A failing room is reported and skipped. The run itself fails only if
    /// every room failed, or if the append fails.
    pub fn run_seats(&self, rooms: &[Room], log: &Path) -> AppResult<RunReport> {
        let timestamp = now_timestamp();
        let delay = Duration::from_millis(self.cfg.request_delay_ms);

        let mut report = RunReport::default();

        for (i, room) in rooms.iter().enumerate() {
            if i > 0 && !delay.is_zero() {
                thread::sleep(delay);
            }

            match self.collect_room(room, &timestamp) {
                Ok(records) => {
                    success(format!(
                        "'{}' (id {}): {} seats collected",
                        room.name,
                        room.id,
                        records.len()
                    ));
                    report.records.extend(records);
                }
                Err(e) => {
                    warning(format!(
                        "'{}' (id {}) skipped, {}: {}",
                        room.name,
                        room.id,
                        e.kind(),
                        e
                    ));
                    report.failures.push((room.clone(), e));
                }
            }
        }

        if !rooms.is_empty() && report.failures.len() == rooms.len() {
            let (_, first) = report.failures.remove(0);
            return Err(first);
        }

        report.written = append_records(&report.records, log)?;
        Ok(report)
    }
}
