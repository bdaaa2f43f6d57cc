use serde::Serialize;

/// Timestamp layout shared by every row of a run (local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Aggregate seat counts of one room (summary log row).
///
/// Field order is the CSV column order. Counts hold the API value verbatim
/// (`"15"`, `"-1"`, `"15.0"`); they are logged, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatSnapshot {
    pub timestamp: String,
    pub room_name: String,
    pub total: String,
    pub occupied: String,
    pub available: String,
}

/// Status of one physical seat (per-seat log row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatRecord {
    pub timestamp: String,
    pub room_name: String,
    pub seat_number: String,
    pub is_occupied: u8, // 1 = occupied, 0 = free
}

impl SeatRecord {
    pub fn new(timestamp: &str, room_name: &str, seat_number: String, occupied: bool) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            room_name: room_name.to_string(),
            seat_number,
            is_occupied: u8::from(occupied),
        }
    }
}
