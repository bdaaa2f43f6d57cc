//! Turn decoded API payloads into flat log rows.
//!
//! Both API surfaces wrap their payload in `{"data": {"list": [...]}}`:
//!
//! * summary: `[{"id": 59, "seats": {"total": 20, "occupied": 5, "available": 15}}, ...]`
//! * per-seat: `[{"code": "A1", "isOccupied": true}, ...]`
//!
//! Only structure is checked: a key that is absent is reported as
//! [`AppError::Schema`] with its dotted path and an excerpt of the raw body.
//! Values of present keys are written as the API sent them.

use crate::errors::{AppError, AppResult};
use crate::models::{Room, SeatRecord, SeatSnapshot};
use crate::utils::text::snippet;
use serde_json::Value;

fn missing(key: &str, raw: &str) -> AppError {
    AppError::Schema {
        key: key.to_string(),
        snippet: snippet(raw),
    }
}

/// The `data.list` array shared by both response shapes.
fn data_list<'a>(json: &'a Value, raw: &str) -> AppResult<&'a Vec<Value>> {
    let data = json.get("data").ok_or_else(|| missing("data", raw))?;
    data.get("list")
        .and_then(Value::as_array)
        .ok_or_else(|| missing("data.list", raw))
}

/// Room ids arrive as numbers, occasionally as numeric strings.
fn as_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// CSV cell text for a present value: strings unquoted, `null` empty,
/// anything else in its JSON form (`-1`, `15.0`, `true`).
fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// `key` of `object`, or a schema error naming `path`.
fn require<'a>(object: &'a Value, key: &str, path: &str, raw: &str) -> AppResult<&'a Value> {
    object.get(key).ok_or_else(|| missing(path, raw))
}

/// Pick the configured room out of a summary-shape response.
///
/// Returns `Ok(None)` when no room carries the target id; that is a normal
/// outcome, not an error. Only the first matching room is used. An id that
/// is neither a number nor a numeric string never matches.
pub fn extract_summary(
    json: &Value,
    raw: &str,
    target: &Room,
    timestamp: &str,
) -> AppResult<Option<SeatSnapshot>> {
    for room in data_list(json, raw)? {
        let id = require(room, "id", "id", raw)?;
        if as_id(id) != Some(target.id) {
            continue;
        }

        let seats = require(room, "seats", "seats", raw)?;
        let count = |key: &str| require(seats, key, &format!("seats.{key}"), raw).map(cell);

        return Ok(Some(SeatSnapshot {
            timestamp: timestamp.to_string(),
            room_name: target.name.clone(),
            total: count("total")?,
            occupied: count("occupied")?,
            available: count("available")?,
        }));
    }

    Ok(None)
}

/// Map every seat of a per-seat response to one record, in response order.
pub fn extract_seats(
    json: &Value,
    raw: &str,
    room: &Room,
    timestamp: &str,
) -> AppResult<Vec<SeatRecord>> {
    data_list(json, raw)?
        .iter()
        .map(|seat| -> AppResult<SeatRecord> {
            let code = cell(require(seat, "code", "code", raw)?);
            let occupied = require(seat, "isOccupied", "isOccupied", raw)?.as_bool() == Some(true);

            Ok(SeatRecord::new(timestamp, &room.name, code, occupied))
        })
        .collect()
}
