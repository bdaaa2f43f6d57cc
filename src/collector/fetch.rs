//! Single-attempt HTTP GET returning the decoded JSON body.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::text::snippet;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, REFERER, USER_AGENT};
use serde_json::Value;
use std::time::Duration;

/// A decoded response. The raw body is kept for error excerpts.
#[derive(Debug)]
pub struct Fetched {
    pub url: String,
    pub body: String,
    pub json: Value,
}

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a client that sends the configured browser-like headers on
    /// every request.
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value("user_agent", &cfg.user_agent)?);
        headers.insert(REFERER, header_value("referer", &cfg.referer)?);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("cannot build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// GET `url` once. Non-2xx statuses are transport failures; a body that
    /// is not JSON is a parse failure.
    pub fn get_json(&self, url: &str) -> AppResult<Fetched> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| transport(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport(url, format!("HTTP {status}")));
        }

        let body = response.text().map_err(|e| transport(url, e.to_string()))?;

        match serde_json::from_str(&body) {
            Ok(json) => Ok(Fetched {
                url: url.to_string(),
                body,
                json,
            }),
            Err(e) => Err(AppError::Parse {
                url: url.to_string(),
                reason: e.to_string(),
                snippet: snippet(&body),
            }),
        }
    }
}

fn transport(url: &str, reason: String) -> AppError {
    AppError::Transport {
        url: url.to_string(),
        reason,
    }
}

fn header_value(key: &str, value: &str) -> AppResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| AppError::Config(format!("{key} is not a valid header value: {e}")))
}
