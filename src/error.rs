use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("Failed to load config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    History(#[from] HistoryError),
}

#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("Timed out fetching {url}")]
    Timeout { url: String },

    #[error("Failed to fetch {url}: {message}")]
    Network { url: String, message: String },

    #[error("Unexpected HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Invalid zone counts payload: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub(crate) enum HistoryError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is locked by another zonecount process", .path.display())]
    Locked { path: PathBuf },
}

impl HistoryError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        HistoryError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_date() {
        let e = AppError::InvalidDate {
            input: "abc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "abc" (expected YYYYMMDD or YYYY-MM-DD)"#
        );
    }

    #[test]
    fn app_error_display_timezone() {
        let e = AppError::InvalidTimezone {
            input: "Mars/Olympus".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn fetch_error_status() {
        let e = FetchError::Status {
            url: "http://localhost/x.json".to_string(),
            status: 503,
        };
        assert_eq!(
            e.to_string(),
            "Unexpected HTTP status 503 from http://localhost/x.json"
        );
    }

    #[test]
    fn app_error_from_fetch_error() {
        let fetch = FetchError::Parse("missing field `comDomainNameBase`".to_string());
        let app: AppError = fetch.into();
        assert_eq!(
            app.to_string(),
            "Invalid zone counts payload: missing field `comDomainNameBase`"
        );
    }

    #[test]
    fn history_error_locked() {
        let e = HistoryError::Locked {
            path: PathBuf::from("data.csv"),
        };
        assert_eq!(
            e.to_string(),
            "data.csv is locked by another zonecount process"
        );
    }

    #[test]
    fn history_error_io_keeps_source() {
        let e = HistoryError::io(
            std::path::Path::new("data.csv"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(e.to_string(), "Failed to access data.csv: denied");
        assert!(std::error::Error::source(&e).is_some());
    }
}
