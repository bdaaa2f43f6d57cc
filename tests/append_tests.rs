use seatlogger::models::{SeatRecord, SeatSnapshot};
use seatlogger::store::{UTF8_BOM, append_records, read_tail};
use std::fs;

mod common;
use common::{log_lines, temp_dir};

fn snapshot(ts: &str, available: u64) -> SeatSnapshot {
    SeatSnapshot {
        timestamp: ts.to_string(),
        room_name: "리클라이너(5F)".to_string(),
        total: "20".to_string(),
        occupied: (20 - available).to_string(),
        available: available.to_string(),
    }
}

#[test]
fn test_first_append_writes_bom_and_header() {
    let dir = temp_dir();
    let log = dir.path().join("summary.csv");

    let written = append_records(&[snapshot("2025-10-20 09:00:00", 15)], &log).expect("append");
    assert_eq!(written, 1);

    let bytes = fs::read(&log).expect("read log");
    assert!(bytes.starts_with(UTF8_BOM));

    let content = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).expect("utf-8");
    assert_eq!(
        content,
        "timestamp,room_name,total,occupied,available\n\
         2025-10-20 09:00:00,리클라이너(5F),20,5,15\n"
    );
}

#[test]
fn test_header_written_once_across_appends() {
    let dir = temp_dir();
    let log = dir.path().join("summary.csv");

    append_records(&[snapshot("2025-10-20 09:00:00", 15)], &log).expect("append 1");
    append_records(&[snapshot("2025-10-20 09:10:00", 12)], &log).expect("append 2");
    append_records(
        &[
            snapshot("2025-10-20 09:20:00", 9),
            snapshot("2025-10-20 09:20:00", 8),
        ],
        &log,
    )
    .expect("append 3");

    let lines = log_lines(&log);
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "timestamp,room_name,total,occupied,available");
    assert!(lines[1].ends_with(",15"));
    assert!(lines[2].ends_with(",12"));
    assert!(lines[3].ends_with(",9"));
    assert!(lines[4].ends_with(",8"));

    let content = fs::read(&log).expect("read log");
    let boms = content.windows(UTF8_BOM.len()).filter(|w| *w == UTF8_BOM).count();
    assert_eq!(boms, 1);
}

#[test]
fn test_empty_batch_does_not_create_file() {
    let dir = temp_dir();
    let log = dir.path().join("seats.csv");

    let written = append_records::<SeatRecord>(&[], &log).expect("append");

    assert_eq!(written, 0);
    assert!(!log.exists());
}

#[test]
fn test_empty_batch_leaves_existing_log_untouched() {
    let dir = temp_dir();
    let log = dir.path().join("summary.csv");
    append_records(&[snapshot("2025-10-20 09:00:00", 15)], &log).expect("append");
    let before = fs::read(&log).expect("read");

    append_records::<SeatSnapshot>(&[], &log).expect("append empty");

    assert_eq!(fs::read(&log).expect("read"), before);
}

#[test]
fn test_existing_content_is_preserved() {
    let dir = temp_dir();
    let log = dir.path().join("seats.csv");
    fs::write(&log, "timestamp,room_name,seat_number,is_occupied\nold,row,X,1\n").expect("seed");

    let rec = SeatRecord::new("2025-10-20 09:00:00", "리클라이너(5F)", "A1".to_string(), true);
    append_records(&[rec], &log).expect("append");

    let content = fs::read_to_string(&log).expect("read");
    assert_eq!(
        content,
        "timestamp,room_name,seat_number,is_occupied\nold,row,X,1\n\
         2025-10-20 09:00:00,리클라이너(5F),A1,1\n"
    );
}

#[test]
fn test_missing_parent_directory_is_created() {
    let dir = temp_dir();
    let log = dir.path().join("nested").join("logs").join("seats.csv");

    let rec = SeatRecord::new("2025-10-20 09:00:00", "Room", "A1".to_string(), false);
    append_records(&[rec], &log).expect("append");

    assert_eq!(log_lines(&log).len(), 2);
}

#[test]
fn test_unwritable_path_is_io_failure() {
    let dir = temp_dir();
    // a directory cannot be opened as the log file
    let err = append_records(&[snapshot("2025-10-20 09:00:00", 1)], dir.path()).unwrap_err();
    assert_eq!(err.exit_code(), 5);
}

#[test]
fn test_read_tail_returns_last_rows() {
    let dir = temp_dir();
    let log = dir.path().join("summary.csv");
    for (i, avail) in [15, 14, 13, 12].iter().enumerate() {
        append_records(&[snapshot(&format!("2025-10-20 09:0{i}:00"), *avail)], &log)
            .expect("append");
    }

    let tail = read_tail(&log, 2).expect("read").expect("log exists");

    assert_eq!(tail.headers[0], "timestamp");
    assert_eq!(tail.total_rows, 4);
    assert_eq!(tail.rows.len(), 2);
    assert_eq!(tail.rows[0][4], "13");
    assert_eq!(tail.rows[1][4], "12");
}

#[test]
fn test_read_tail_missing_log() {
    let dir = temp_dir();
    assert!(read_tail(&dir.path().join("none.csv"), 5).expect("read").is_none());
}
