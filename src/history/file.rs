use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use super::reader::{has_header, latest_from_str};
use crate::consts::HEADER;
use crate::core::{CountTriple, ZoneCountSnapshot};
use crate::error::HistoryError;

/// The log file opened for one read-compare-append sequence.
///
/// Holds an exclusive advisory lock from `open_locked` until drop, so two
/// scheduled runs cannot both read the same latest row and both append.
pub(super) struct LogFile {
    path: PathBuf,
    file: File,
    contents: String,
}

impl LogFile {
    pub(super) fn open_locked(path: &Path) -> Result<Self, HistoryError> {
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| HistoryError::io(path, e))?;

        file.try_lock_exclusive().map_err(|e| {
            if e.kind() == fs2::lock_contended_error().kind() {
                HistoryError::Locked {
                    path: path.to_path_buf(),
                }
            } else {
                HistoryError::io(path, e)
            }
        })?;
        debug!(path = %path.display(), "locked log file");

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| HistoryError::io(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
            contents,
        })
    }

    pub(super) fn latest(&self) -> Option<CountTriple> {
        latest_from_str(&self.contents)
    }

    /// Append one data row with a single write at the end of the file
    pub(super) fn append(&mut self, snapshot: &ZoneCountSnapshot) -> Result<(), HistoryError> {
        let mut buf = String::new();
        if self.contents.is_empty() {
            buf.push_str(&HEADER.join(","));
            buf.push('\n');
        } else {
            if !has_header(&self.contents) {
                // A header is only ever the first row, so a headerless log stays headerless
                debug!(path = %self.path.display(), "log has no header row");
            }
            if !self.contents.ends_with('\n') {
                buf.push('\n');
            }
        }
        buf.push_str(&snapshot.to_row());
        buf.push('\n');

        self.file
            .write_all(buf.as_bytes())
            .map_err(|e| HistoryError::io(&self.path, e))?;
        self.file
            .sync_all()
            .map_err(|e| HistoryError::io(&self.path, e))?;
        self.contents.push_str(&buf);
        Ok(())
    }
}
