//! Zone counts fetcher
//!
//! One HTTP GET against the zone counts feed, decoded into [`ZoneCounts`].

mod payload;
mod provider;

use std::time::Duration;

use crate::core::ZoneCounts;
use crate::error::FetchError;

pub(crate) use payload::parse_zone_counts;

/// Where and how to fetch the feed
#[derive(Debug, Clone)]
pub(crate) struct FetchOptions {
    pub(crate) url: String,
    pub(crate) timeout: Duration,
    /// Skip TLS certificate verification
    pub(crate) insecure: bool,
}

pub(crate) fn fetch_zone_counts(options: &FetchOptions) -> Result<ZoneCounts, FetchError> {
    let body = provider::fetch_body(options)?;
    parse_zone_counts(&body)
}
