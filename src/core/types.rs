//! Core data types for zone count snapshots
//!
//! A snapshot is one day's reading of the .com and .net domain name base.

use chrono::NaiveDate;
use serde::Serialize;

use crate::consts::DATE_FORMAT;

/// (com, net, total) as stored in one log row.
///
/// Rows read back from disk are not guaranteed to satisfy `total == com + net`,
/// so comparisons against the log use this raw triple.
pub(crate) type CountTriple = (u64, u64, u64);

/// The last data row of the log as recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct LatestEntry {
    /// Date cell exactly as written, not validated
    pub(crate) date: String,
    pub(crate) counts: CountTriple,
}

/// Domain name base counts for the two zones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct ZoneCounts {
    com: u64,
    net: u64,
    total: u64,
}

impl ZoneCounts {
    /// Returns `None` if the sum does not fit in a u64
    pub(crate) fn new(com: u64, net: u64) -> Option<Self> {
        let total = com.checked_add(net)?;
        Some(Self { com, net, total })
    }

    pub(crate) fn com(&self) -> u64 {
        self.com
    }

    pub(crate) fn net(&self) -> u64 {
        self.net
    }

    pub(crate) fn total(&self) -> u64 {
        self.total
    }

    pub(crate) fn triple(&self) -> CountTriple {
        (self.com, self.net, self.total)
    }
}

/// One dated reading, the unit appended to the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct ZoneCountSnapshot {
    pub(crate) date: NaiveDate,
    #[serde(flatten)]
    pub(crate) counts: ZoneCounts,
}

impl ZoneCountSnapshot {
    pub(crate) fn new(date: NaiveDate, counts: ZoneCounts) -> Self {
        Self { date, counts }
    }

    /// Serialize as a CSV data row, without the trailing newline
    pub(crate) fn to_row(&self) -> String {
        format!(
            "{},{},{},{}",
            self.date.format(DATE_FORMAT),
            self.counts.com,
            self.counts.net,
            self.counts.total
        )
    }
}

/// Result of comparing a fresh snapshot against the log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    /// The snapshot was written as a new row
    Appended(ZoneCountSnapshot),
    /// The latest row already holds these counts
    Skipped,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn zone_counts_total_is_sum() {
        let counts = ZoneCounts::new(160_000_000, 13_000_000).unwrap();
        assert_eq!(counts.total(), 173_000_000);
        assert_eq!(counts.triple(), (160_000_000, 13_000_000, 173_000_000));
    }

    #[test]
    fn zone_counts_overflow_is_rejected() {
        assert!(ZoneCounts::new(u64::MAX, 1).is_none());
        assert!(ZoneCounts::new(u64::MAX, 0).is_some());
    }

    #[test]
    fn snapshot_row_format() {
        let snap = ZoneCountSnapshot::new(date("2026-02-06"), ZoneCounts::new(100, 200).unwrap());
        assert_eq!(snap.to_row(), "2026-02-06,100,200,300");
    }

    #[test]
    fn snapshot_serializes_flat() {
        let snap = ZoneCountSnapshot::new(date("2026-02-06"), ZoneCounts::new(1, 2).unwrap());
        let json = serde_json::to_value(snap).unwrap();
        assert_eq!(json["date"], "2026-02-06");
        assert_eq!(json["com"], 1);
        assert_eq!(json["net"], 2);
        assert_eq!(json["total"], 3);
    }
}
