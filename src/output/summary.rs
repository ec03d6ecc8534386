//! One-line run summaries, as text or JSON

use serde::Serialize;

use super::format::{NumberFormat, format_number};
use crate::consts::DATE_FORMAT;
use crate::core::{LatestEntry, ZoneCountSnapshot};

/// What a run did, ready to be printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunOutcome {
    Appended(ZoneCountSnapshot),
    Skipped(ZoneCountSnapshot),
    /// `--dry-run`: the snapshot that would have been compared and appended
    DryRun {
        snapshot: ZoneCountSnapshot,
        would_append: bool,
    },
}

#[derive(Serialize)]
struct OutcomeJson<'a> {
    status: &'a str,
    #[serde(flatten)]
    snapshot: &'a ZoneCountSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    would_append: Option<bool>,
}

fn snapshot_line(prefix: &str, snapshot: &ZoneCountSnapshot, format: NumberFormat) -> String {
    format!(
        "{prefix}: {} | .com: {} | .net: {} | total: {}",
        snapshot.date.format(DATE_FORMAT),
        format_number(snapshot.counts.com(), format),
        format_number(snapshot.counts.net(), format),
        format_number(snapshot.counts.total(), format),
    )
}

pub(crate) fn format_outcome_text(outcome: &RunOutcome, format: NumberFormat) -> String {
    match outcome {
        RunOutcome::Appended(snapshot) => snapshot_line("Appended", snapshot, format),
        RunOutcome::Skipped(_) => {
            "No change; counts match latest entry. Skipping save.".to_string()
        }
        RunOutcome::DryRun {
            snapshot,
            would_append: true,
        } => snapshot_line("Would append", snapshot, format),
        RunOutcome::DryRun {
            would_append: false,
            ..
        } => "No change; counts match latest entry. Nothing to save.".to_string(),
    }
}

pub(crate) fn format_outcome_json(outcome: &RunOutcome) -> String {
    let json = match outcome {
        RunOutcome::Appended(snapshot) => OutcomeJson {
            status: "appended",
            snapshot,
            would_append: None,
        },
        RunOutcome::Skipped(snapshot) => OutcomeJson {
            status: "skipped",
            snapshot,
            would_append: None,
        },
        RunOutcome::DryRun {
            snapshot,
            would_append,
        } => OutcomeJson {
            status: "dry_run",
            snapshot,
            would_append: Some(*would_append),
        },
    };
    serde_json::to_string(&json).unwrap_or_else(|_| "{}".to_string())
}

/// Summary for the `latest` command
pub(crate) fn format_latest_text(latest: Option<&LatestEntry>, format: NumberFormat) -> String {
    match latest {
        Some(entry) => {
            let (com, net, total) = entry.counts;
            format!(
                "Latest: {} | .com: {} | .net: {} | total: {}",
                entry.date,
                format_number(com, format),
                format_number(net, format),
                format_number(total, format),
            )
        }
        None => "No entries recorded.".to_string(),
    }
}

pub(crate) fn format_latest_json(latest: Option<&LatestEntry>) -> String {
    let value = match latest {
        Some(entry) => {
            let (com, net, total) = entry.counts;
            serde_json::json!({
                "date": entry.date,
                "com": com,
                "net": net,
                "total": total,
            })
        }
        None => serde_json::Value::Null,
    };
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ZoneCounts;
    use chrono::NaiveDate;
    use serde_json::Value;

    fn snapshot() -> ZoneCountSnapshot {
        ZoneCountSnapshot::new(
            NaiveDate::from_ymd_opt(2026, 2, 6).unwrap(),
            ZoneCounts::new(160_000_000, 13_000_000).unwrap(),
        )
    }

    #[test]
    fn appended_text_groups_thousands() {
        let line = format_outcome_text(&RunOutcome::Appended(snapshot()), NumberFormat::default());
        assert_eq!(
            line,
            "Appended: 2026-02-06 | .com: 160,000,000 | .net: 13,000,000 | total: 173,000,000"
        );
    }

    #[test]
    fn skipped_text() {
        let line = format_outcome_text(&RunOutcome::Skipped(snapshot()), NumberFormat::default());
        assert_eq!(line, "No change; counts match latest entry. Skipping save.");
    }

    #[test]
    fn dry_run_text() {
        let outcome = RunOutcome::DryRun {
            snapshot: snapshot(),
            would_append: true,
        };
        let line = format_outcome_text(&outcome, NumberFormat::default());
        assert!(line.starts_with("Would append: 2026-02-06"), "{line}");
    }

    #[test]
    fn appended_json() {
        let json: Value =
            serde_json::from_str(&format_outcome_json(&RunOutcome::Appended(snapshot()))).unwrap();
        assert_eq!(json["status"], "appended");
        assert_eq!(json["date"], "2026-02-06");
        assert_eq!(json["com"], 160_000_000);
        assert_eq!(json["net"], 13_000_000);
        assert_eq!(json["total"], 173_000_000);
        assert!(json.get("would_append").is_none());
    }

    #[test]
    fn dry_run_json_reports_decision() {
        let outcome = RunOutcome::DryRun {
            snapshot: snapshot(),
            would_append: false,
        };
        let json: Value = serde_json::from_str(&format_outcome_json(&outcome)).unwrap();
        assert_eq!(json["status"], "dry_run");
        assert_eq!(json["would_append"], false);
    }

    #[test]
    fn latest_text_and_json() {
        let fmt = NumberFormat::default();
        let entry = LatestEntry {
            date: "2026-02-06".to_string(),
            counts: (1000, 2000, 3000),
        };
        assert_eq!(format_latest_text(None, fmt), "No entries recorded.");
        assert_eq!(
            format_latest_text(Some(&entry), fmt),
            "Latest: 2026-02-06 | .com: 1,000 | .net: 2,000 | total: 3,000"
        );
        assert_eq!(format_latest_json(None), "null");
        let json: Value = serde_json::from_str(&format_latest_json(Some(&entry))).unwrap();
        assert_eq!(json["date"], "2026-02-06");
        assert_eq!(json["total"], 3000);
    }
}
