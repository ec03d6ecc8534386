//! Parsing of the CSV log contents
//!
//! Everything here works on the file contents as a string so the rules for
//! "what is the latest entry" can be tested without touching the disk.

use tracing::debug;

use crate::consts::HEADER;
use crate::core::{CountTriple, LatestEntry};

/// Split one CSV line into fields, honoring double-quoted fields with `""` escapes
pub(super) fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

fn strip_bom(contents: &str) -> &str {
    contents.strip_prefix('\u{feff}').unwrap_or(contents)
}

/// A header row is recognized by its first cell alone
pub(super) fn is_header_row(line: &str) -> bool {
    split_row(line)
        .first()
        .is_some_and(|cell| cell.eq_ignore_ascii_case(HEADER[0]))
}

/// Whether the log already starts with a header row
pub(super) fn has_header(contents: &str) -> bool {
    strip_bom(contents).lines().next().is_some_and(is_header_row)
}

/// The last data row: its date cell and (com, net, total) triple.
///
/// Returns `None` when there is no data row, or when the last row is too short
/// or holds a non-integer count. A malformed tail counts as "no prior entry".
pub(super) fn latest_entry_from_str(contents: &str) -> Option<LatestEntry> {
    let mut rows = strip_bom(contents).lines();
    let first = rows.next()?;
    let last = match rows.last() {
        Some(last) => last,
        None if is_header_row(first) => return None,
        None => first,
    };

    let fields = split_row(last);
    if fields.len() < HEADER.len() {
        debug!(
            row = last,
            "last log row has too few fields, treating as no prior entry"
        );
        return None;
    }

    let parse = |s: &str| s.trim().parse::<u64>().ok();
    match (parse(&fields[1]), parse(&fields[2]), parse(&fields[3])) {
        (Some(com), Some(net), Some(total)) => Some(LatestEntry {
            date: fields[0].trim().to_string(),
            counts: (com, net, total),
        }),
        _ => {
            debug!(
                row = last,
                "last log row has non-numeric counts, treating as no prior entry"
            );
            None
        }
    }
}

/// The (com, net, total) triple of the last data row
pub(super) fn latest_from_str(contents: &str) -> Option<CountTriple> {
    latest_entry_from_str(contents).map(|entry| entry.counts)
}
