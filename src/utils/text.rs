//! Small text helpers for diagnostics.

/// Length of the raw-body excerpt attached to decode errors.
pub const SNIPPET_CHARS: usize = 200;

/// First `max` characters of `body` (never splits a UTF-8 sequence),
/// followed by `...` when something was cut.
pub fn truncate_chars(body: &str, max: usize) -> String {
    match body.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

/// Body excerpt used in parse/schema errors.
pub fn snippet(body: &str) -> String {
    truncate_chars(body.trim(), SNIPPET_CHARS)
}
