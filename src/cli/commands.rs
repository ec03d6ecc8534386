//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Clone, Copy, Subcommand)]
pub(crate) enum Commands {
    /// Fetch the current counts and append them if they changed (default)
    Run,
    /// Show the latest recorded entry without fetching
    Latest,
}
