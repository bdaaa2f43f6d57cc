use crate::errors::{AppError, AppResult};
use crate::models::Room;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder substituted with the room id in `seat_url`.
pub const ROOM_ID_PLACEHOLDER: &str = "{room_id}";

/// Static run configuration. Loaded once and handed to the collector;
/// nothing mutates it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_summary_url")]
    pub summary_url: String,
    #[serde(default = "default_seat_url")]
    pub seat_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_referer")]
    pub referer: String,
    #[serde(default = "default_target_room")]
    pub target_room: Room,
    #[serde(default = "default_rooms")]
    pub rooms: Vec<Room>,
    #[serde(default = "default_summary_log")]
    pub summary_log: String,
    #[serde(default = "default_seats_log")]
    pub seats_log: String,
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_summary_url() -> String {
    "https://oasis.ssu.ac.kr/pyxis-api/1/seat-rooms?smufMethodCode=PC&roomTypeId=2&branchGroupId=1"
        .to_string()
}
fn default_seat_url() -> String {
    format!("https://oasis.ssu.ac.kr/pyxis-api/1/api/rooms/{ROOM_ID_PLACEHOLDER}/seats")
}
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/141.0.0.0 Safari/537.36 Edg/141.0.0.0".to_string()
}
fn default_referer() -> String {
    "https://oasis.ssu.ac.kr/".to_string()
}
fn default_target_room() -> Room {
    Room::new(59, "리클라이너(5F)")
}
fn default_rooms() -> Vec<Room> {
    vec![default_target_room()]
}
fn default_summary_log() -> String {
    "recliner_seats_log.csv".to_string()
}
fn default_seats_log() -> String {
    "seat_status_log.csv".to_string()
}
fn default_request_delay_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summary_url: default_summary_url(),
            seat_url: default_seat_url(),
            user_agent: default_user_agent(),
            referer: default_referer(),
            target_room: default_target_room(),
            rooms: default_rooms(),
            summary_log: default_summary_log(),
            seats_log: default_seats_log(),
            request_delay_ms: default_request_delay_ms(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("seatlogger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".seatlogger")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("seatlogger.conf")
    }

    /// Load configuration from `path` (or the default location).
    /// A missing file yields the built-in defaults; a broken one is an error.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map_or_else(Self::config_file, Path::to_path_buf);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Write the default configuration to `path`. Existing files are kept
    /// unless `force` is set.
    pub fn init(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Self::default())
            .map_err(|e| AppError::Config(format!("cannot serialize defaults: {e}")))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn summary_log_path(&self) -> PathBuf {
        expand_tilde(&self.summary_log)
    }

    pub fn seats_log_path(&self) -> PathBuf {
        expand_tilde(&self.seats_log)
    }

    /// Per-room seat-list endpoint.
    pub fn seat_url_for(&self, room: &Room) -> String {
        self.seat_url.replace(ROOM_ID_PLACEHOLDER, &room.id.to_string())
    }

    /// Validate the configuration and return every problem found.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        for (key, url) in [("summary_url", &self.summary_url), ("seat_url", &self.seat_url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                problems.push(format!("{key} must be an absolute http(s) URL: '{url}'"));
            }
        }
        if !self.seat_url.contains(ROOM_ID_PLACEHOLDER) {
            problems.push(format!("seat_url has no {ROOM_ID_PLACEHOLDER} placeholder"));
        }
        if self.rooms.is_empty() {
            problems.push("rooms is empty".to_string());
        }
        let mut seen = HashSet::new();
        for room in &self.rooms {
            if room.name.trim().is_empty() {
                problems.push(format!("room {} has an empty name", room.id));
            }
            if !seen.insert(room.id) {
                problems.push(format!("room id {} is listed more than once", room.id));
            }
        }
        if self.summary_log.trim().is_empty() {
            problems.push("summary_log is empty".to_string());
        }
        if self.seats_log.trim().is_empty() {
            problems.push("seats_log is empty".to_string());
        }

        problems
    }
}
