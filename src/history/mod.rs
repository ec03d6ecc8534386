//! Append-only CSV log of zone count snapshots
//!
//! Layout: an optional `date,com,net,total` header followed by one
//! `YYYY-MM-DD,com,net,total` row per recorded snapshot.

mod file;
mod reader;

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::core::{CountTriple, Decision, LatestEntry, ZoneCountSnapshot};
use crate::error::HistoryError;

use file::LogFile;
use reader::latest_entry_from_str;

/// The last data row, or `None` if there is no comparable entry.
///
/// A missing file is not an error; any other I/O failure is.
pub(crate) fn read_latest_entry(path: &Path) -> Result<Option<LatestEntry>, HistoryError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(latest_entry_from_str(&contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "log file does not exist yet");
            Ok(None)
        }
        Err(e) => Err(HistoryError::io(path, e)),
    }
}

/// Counts of the last data row, or `None` if there is no comparable entry
pub(crate) fn read_latest(path: &Path) -> Result<Option<CountTriple>, HistoryError> {
    Ok(read_latest_entry(path)?.map(|entry| entry.counts))
}

/// Append `snapshot` unless the latest row already holds the same counts.
pub(crate) fn append_if_changed(
    path: &Path,
    snapshot: &ZoneCountSnapshot,
) -> Result<Decision, HistoryError> {
    let mut log = LogFile::open_locked(path)?;

    let latest = log.latest();
    if latest == Some(snapshot.counts.triple()) {
        info!(path = %path.display(), "counts unchanged, skipping append");
        return Ok(Decision::Skipped);
    }
    debug!(?latest, "latest entry differs");

    log.append(snapshot)?;
    info!(path = %path.display(), row = %snapshot.to_row(), "appended snapshot");
    Ok(Decision::Appended(*snapshot))
}
