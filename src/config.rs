use std::time::Duration;

/// File name the catalog is published under, relative to the site root.
pub const DEFAULT_DATA_FILE: &str = "data/offers.json";

/// Fixed EUR → RON rate used only to rank prices across currencies.
pub const EUR_TO_RON: f64 = 5.0;

pub fn default_timeout() -> Duration {
    Duration::from_secs(30)
}
