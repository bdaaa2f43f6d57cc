//! Console status lines for a collection run.
//!
//! Progress and per-room outcomes go to stdout; only the terminal failure
//! printed by `main` goes to stderr, so a scheduler log keeps both apart.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

fn line(level: Level, msg: impl fmt::Display) -> String {
    format!("{}{}{} {}{}", level.color(), BOLD, level.icon(), RESET, msg)
}

/// Neutral progress, e.g. "No new data collected."
pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Info, msg));
}

/// Rows collected or saved.
pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Success, msg));
}

/// Skipped room, room not found, configuration problem.
pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Warning, msg));
}

/// Run-level failure (stderr).
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Level::Error, msg));
}

/// Opening line of a run.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}--- {} ---{}", Level::Info.color(), BOLD, msg, RESET);
}
