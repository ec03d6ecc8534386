//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

use crate::config::Config;
use crate::consts::{DEFAULT_DATA_FILE, FETCH_TIMEOUT, ZONE_COUNTS_URL};

use super::commands::Commands;

#[derive(Parser)]
#[command(name = "zonecount")]
#[command(
    about = "Record the daily .com/.net domain name base from the Verisign zone counts feed",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Zone counts JSON endpoint
    #[arg(long, global = true, value_name = "URL")]
    pub(crate) url: Option<String>,

    /// CSV log to read and append to [default: data.csv]
    #[arg(short = 'f', long, global = true, value_name = "PATH")]
    pub(crate) data_file: Option<PathBuf>,

    /// Request timeout in seconds [default: 15]
    #[arg(
        long,
        global = true,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub(crate) timeout: Option<u64>,

    /// Skip TLS certificate verification (only for hosts with a broken trust store)
    #[arg(long, global = true)]
    pub(crate) insecure: bool,

    /// Record under this date instead of today (YYYYMMDD or YYYY-MM-DD)
    #[arg(long, global = true)]
    pub(crate) date: Option<String>,

    /// Timezone that decides today's date (e.g., "UTC", "America/New_York")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Locale for number formatting (e.g., "en", "de", "fr")
    #[arg(long, global = true, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Fetch and compare, but do not write to the log
    #[arg(short = 'n', long, global = true)]
    pub(crate) dry_run: bool,

    /// Enable debug output on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Read config from this file instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.insecure && config.insecure {
            self.insecure = true;
        }
        if !self.json && config.json {
            self.json = true;
        }

        if self.url.is_none() {
            self.url = config.url.clone();
        }
        if self.data_file.is_none() {
            self.data_file = config.data_file.clone();
        }
        if self.timeout.is_none() {
            self.timeout = config.timeout_secs.filter(|secs| *secs > 0);
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }

        self
    }

    pub(crate) fn url(&self) -> &str {
        self.url.as_deref().unwrap_or(ZONE_COUNTS_URL)
    }

    pub(crate) fn data_file(&self) -> &Path {
        self.data_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_DATA_FILE))
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.timeout.map_or(FETCH_TIMEOUT, Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("zonecount").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_without_arguments() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.url(), ZONE_COUNTS_URL);
        assert_eq!(cli.data_file(), Path::new("data.csv"));
        assert_eq!(cli.timeout(), Duration::from_secs(15));
        assert!(!cli.insecure);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["zonecount", "--timeout", "0"]).is_err());
    }

    #[test]
    fn config_fills_unset_values() {
        let config = Config {
            url: Some("http://mirror.local/zc.json".to_string()),
            data_file: Some(PathBuf::from("/tmp/zc.csv")),
            timeout_secs: Some(3),
            insecure: true,
            json: true,
            timezone: Some("UTC".to_string()),
            locale: Some("de".to_string()),
        };
        let cli = parse(&[]).with_config(&config);
        assert_eq!(cli.url(), "http://mirror.local/zc.json");
        assert_eq!(cli.data_file(), Path::new("/tmp/zc.csv"));
        assert_eq!(cli.timeout(), Duration::from_secs(3));
        assert!(cli.insecure);
        assert!(cli.json);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert_eq!(cli.locale.as_deref(), Some("de"));
    }

    #[test]
    fn cli_values_win_over_config() {
        let config = Config {
            url: Some("http://mirror.local/zc.json".to_string()),
            data_file: Some(PathBuf::from("/tmp/zc.csv")),
            timeout_secs: Some(3),
            locale: Some("de".to_string()),
            ..Config::default()
        };
        let cli = parse(&[
            "--url",
            "http://other.local/x.json",
            "-f",
            "mine.csv",
            "--timeout",
            "9",
            "--locale",
            "fr",
        ])
        .with_config(&config);
        assert_eq!(cli.url(), "http://other.local/x.json");
        assert_eq!(cli.data_file(), Path::new("mine.csv"));
        assert_eq!(cli.timeout(), Duration::from_secs(9));
        assert_eq!(cli.locale.as_deref(), Some("fr"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["latest", "--json", "-f", "zc.csv"]);
        assert!(matches!(cli.command, Some(Commands::Latest)));
        assert!(cli.json);
        assert_eq!(cli.data_file(), Path::new("zc.csv"));
    }
}
