use tracing::info;

use crate::cli::{Cli, Commands};
use crate::core::{Decision, ZoneCountSnapshot};
use crate::error::{AppError, FetchError};
use crate::fetch::{FetchOptions, fetch_zone_counts};
use crate::history::{append_if_changed, read_latest, read_latest_entry};
use crate::output::{
    NumberFormat, RunOutcome, format_latest_json, format_latest_text, format_outcome_json,
    format_outcome_text,
};
use crate::utils::{Timezone, parse_date};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) timezone: Timezone,
    pub(crate) number_format: NumberFormat,
}

impl CommandContext<'_> {
    fn today(&self) -> Result<chrono::NaiveDate, AppError> {
        match self.cli.date.as_deref() {
            Some(raw) => parse_date(raw),
            None => Ok(self.timezone.today()),
        }
    }
}

fn fetch_snapshot(ctx: &CommandContext<'_>) -> Result<ZoneCountSnapshot, AppError> {
    let today = ctx.today()?;
    let options = FetchOptions {
        url: ctx.cli.url().to_string(),
        timeout: ctx.cli.timeout(),
        insecure: ctx.cli.insecure,
    };
    let counts = fetch_zone_counts(&options)?;
    info!(
        com = counts.com(),
        net = counts.net(),
        total = counts.total(),
        "fetched zone counts"
    );
    Ok(ZoneCountSnapshot::new(today, counts))
}

/// Fetch, compare against the latest row and append if changed
pub(crate) fn handle_run(ctx: &CommandContext<'_>) -> Result<RunOutcome, AppError> {
    let snapshot = fetch_snapshot(ctx)?;
    let path = ctx.cli.data_file();

    if ctx.cli.dry_run {
        let latest = read_latest(path)?;
        return Ok(RunOutcome::DryRun {
            snapshot,
            would_append: latest != Some(snapshot.counts.triple()),
        });
    }

    Ok(match append_if_changed(path, &snapshot)? {
        Decision::Appended(written) => RunOutcome::Appended(written),
        Decision::Skipped => RunOutcome::Skipped(snapshot),
    })
}

fn handle_latest(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let latest = read_latest_entry(ctx.cli.data_file())?;
    if ctx.cli.json {
        println!("{}", format_latest_json(latest.as_ref()));
    } else {
        println!("{}", format_latest_text(latest.as_ref(), ctx.number_format));
    }
    Ok(())
}

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let ctx = CommandContext {
        cli,
        timezone: Timezone::parse(cli.timezone.as_deref())?,
        number_format: NumberFormat::from_locale(cli.locale.as_deref())?,
    };

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let outcome = handle_run(&ctx)?;
            if cli.json {
                println!("{}", format_outcome_json(&outcome));
            } else {
                println!("{}", format_outcome_text(&outcome, ctx.number_format));
            }
            Ok(())
        }
        Commands::Latest => handle_latest(&ctx),
    }
}

/// Extra guidance printed under an error message
pub(crate) fn error_hint(err: &AppError) -> Option<&'static str> {
    match err {
        AppError::Fetch(FetchError::Network { .. }) => Some(
            "If this is a certificate error caused by a missing local trust store, \
             fix the trust store or rerun with --insecure.",
        ),
        _ => None,
    }
}
