#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use seatlogger::config::Config;
use seatlogger::models::Room;
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

pub const SUMMARY_PATH: &str = "/seat-rooms";

pub fn sl() -> Command {
    cargo_bin_cmd!("seatlogger")
}

/// Run the binary off the async runtime so a wiremock server on the same
/// runtime keeps answering.
pub async fn run_cli(args: Vec<String>) -> Output {
    tokio::task::spawn_blocking(move || sl().args(&args).output().expect("spawn seatlogger"))
        .await
        .expect("join cli task")
}

pub fn seat_path(room_id: i64) -> String {
    format!("/rooms/{room_id}/seats")
}

/// Config pointing at a mock server, with no pacing delay and logs inside `dir`.
pub fn test_config(dir: &Path, server_uri: &str, rooms: Vec<Room>) -> Config {
    Config {
        summary_url: format!("{server_uri}{SUMMARY_PATH}"),
        seat_url: format!("{server_uri}/rooms/{{room_id}}/seats"),
        target_room: Room::new(59, "리클라이너(5F)"),
        rooms,
        summary_log: dir.join("summary.csv").to_string_lossy().to_string(),
        seats_log: dir.join("seats.csv").to_string_lossy().to_string(),
        request_delay_ms: 0,
        ..Config::default()
    }
}

/// Write `cfg` as YAML into `dir` and return its path as a CLI argument.
pub fn write_config(dir: &Path, cfg: &Config) -> String {
    let path = dir.join("seatlogger.conf");
    fs::write(&path, cfg.to_yaml().expect("serialize config")).expect("write config");
    path.to_string_lossy().to_string()
}

pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Log content without the leading BOM, split into lines.
pub fn log_lines(path: &Path) -> Vec<String> {
    let content = fs::read_to_string(path).expect("read log");
    content
        .trim_start_matches('\u{feff}')
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
