//! Client Configuration
//!
//! Build-time settings read from the environment Trunk compiles under.

use std::str::FromStr;

/// Default delay before a status message clears itself
pub const DEFAULT_STATUS_CLEAR_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientConfig {
    /// Prefix for every API path; empty means same origin
    pub api_base: &'static str,
    pub status_clear_ms: u32,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "",
            status_clear_ms: DEFAULT_STATUS_CLEAR_MS,
            log_level: log::Level::Info,
        }
    }
}

impl ClientConfig {
    /// Resolve from `TODO_API_BASE`, `TODO_STATUS_CLEAR_MS` and `TODO_LOG_LEVEL`
    pub fn from_env() -> Self {
        Self {
            api_base: option_env!("TODO_API_BASE").unwrap_or(""),
            status_clear_ms: parse_delay(option_env!("TODO_STATUS_CLEAR_MS")),
            log_level: parse_level(option_env!("TODO_LOG_LEVEL")),
        }
    }
}

fn parse_delay(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_STATUS_CLEAR_MS)
}

fn parse_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|v| log::Level::from_str(v.trim()).ok())
        .unwrap_or(log::Level::Info)
}
