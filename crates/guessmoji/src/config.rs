//! Environment configuration.
//!
//! `GUESSMOJI_THRESHOLD` overrides the default similarity threshold.

use guessmoji_core::FilterConfig;

use crate::error::{Error, Result};

/// Environment variable holding the default threshold
pub const THRESHOLD_ENV: &str = "GUESSMOJI_THRESHOLD";

/// Filter configuration with environment overrides applied
pub fn filter_config_from_env() -> Result<FilterConfig> {
    filter_config_from(std::env::var(THRESHOLD_ENV).ok().as_deref())
}

/// Filter configuration from an optional raw threshold value
pub fn filter_config_from(threshold: Option<&str>) -> Result<FilterConfig> {
    let Some(raw) = threshold.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(FilterConfig::default());
    };
    let threshold: f64 = raw
        .parse()
        .map_err(|_| Error::Config(format!("{} is not a number: '{}'", THRESHOLD_ENV, raw)))?;
    Ok(FilterConfig::with_threshold(threshold))
}
