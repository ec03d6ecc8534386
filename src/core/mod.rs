//! Core module - snapshot types shared by the fetcher and the log

mod types;

pub(crate) use types::{CountTriple, Decision, LatestEntry, ZoneCountSnapshot, ZoneCounts};
