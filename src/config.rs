use anyhow::{anyhow, Result};
use std::env;

use crate::pattern::{Pattern, SECOND_PATTERN};

const DEFAULT_LOG_FILTER: &str = "easy_time=info";

/// Settings read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing` env-filter directive, from `EASY_TIME_LOG`.
    pub log_filter: String,
    /// Pattern used when the caller names none, from `EASY_TIME_PATTERN`.
    pub default_pattern: Pattern,
}

impl Config {
    /// Reads `EASY_TIME_LOG` and `EASY_TIME_PATTERN`, falling back to defaults when unset or blank.
    pub fn from_env() -> Result<Self> {
        let log_filter = env::var("EASY_TIME_LOG")
            .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
        let log_filter = if log_filter.trim().is_empty() {
            DEFAULT_LOG_FILTER.to_string()
        } else {
            log_filter
        };

        let default_pattern = match env::var("EASY_TIME_PATTERN") {
            Ok(value) if !value.trim().is_empty() => Pattern::of(&value)
                .map_err(|e| anyhow!("Invalid EASY_TIME_PATTERN: {}", e))?,
            _ => SECOND_PATTERN,
        };

        Ok(Config {
            log_filter,
            default_pattern,
        })
    }
}
