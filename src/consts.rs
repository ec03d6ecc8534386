use std::time::Duration;

/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Verisign publishes the domain name base for .com and .net here
pub(crate) const ZONE_COUNTS_URL: &str =
    "https://www.verisign.com/zone-domain-counts/zone_counts.json";

/// Log file used when neither CLI nor config names one
pub(crate) const DEFAULT_DATA_FILE: &str = "data.csv";

pub(crate) const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Header row written to a new log file
pub(crate) const HEADER: [&str; 4] = ["date", "com", "net", "total"];
