//! `timeoff` CLI — summarize time off taken against a yearly budget.
//!
//! Reads all-day events from a calendar, keeps the ones titled as leave
//! (`Company Holiday: <name>`, `Time Off[: <name>]`, `Sick Leave[: <name>]`),
//! merges them into ranges and prints how many budget days each consumed.
//!
//! ## Usage
//!
//! ```sh
//! # Directory of .ics files, budget accruing since the start of 2024
//! timeoff --calendar ~/calendar/personal --since 2024-01-01
//!
//! # JSON event list, 25 days per year, machine-readable output
//! timeoff -c events.json --since 2024-01-01 --target-days-per-year 25 --json
//!
//! # Evaluate the budget as of a fixed day
//! timeoff -c events.json --since 2024-01-01 --as-of 2024-07-01
//! ```

mod calendar;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, Utc};
use clap::Parser;
use colored::Colorize;
use timeoff_engine::{EventWindow, Report, TimeOffTracker, TrackerConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "timeoff",
    version,
    about = "Summarize holidays, vacation and sick leave against a yearly budget"
)]
struct Cli {
    /// Calendar to read: a directory of .ics files, an .ics file or a .json event list
    #[arg(short, long, env = "TIMEOFF_CALENDAR")]
    calendar: PathBuf,

    /// Budget start and first day of the event window (YYYY-MM-DD) [default: today]
    #[arg(long, env = "TIMEOFF_SINCE", value_parser = parse_date)]
    since: Option<NaiveDate>,

    /// Last day of the event window (YYYY-MM-DD) [default: Dec 31 of the --as-of year]
    #[arg(long, value_parser = parse_date)]
    until: Option<NaiveDate>,

    /// Day the budget is evaluated on (YYYY-MM-DD) [default: now]
    #[arg(long, value_parser = parse_date)]
    as_of: Option<NaiveDate>,

    /// Days of time off accrued per year
    #[arg(
        short,
        long,
        env = "TIMEOFF_TARGET_DAYS",
        default_value_t = TrackerConfig::DEFAULT_TARGET_DAYS_PER_YEAR
    )]
    target_days_per_year: u32,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let today = Local::now().date_naive();
    let since = cli.since.unwrap_or(today);
    let as_of = cli.as_of.map(start_of_day).unwrap_or_else(Utc::now);
    let until = match cli.until {
        Some(until) => until,
        None => end_of_year(cli.as_of.unwrap_or(today))?,
    };

    let window = EventWindow::new(since, until).context("Invalid --since/--until")?;
    debug!(%since, %until, %as_of, "event window");

    let source = calendar::open(&cli.calendar)?;
    let config = TrackerConfig::new(start_of_day(since), cli.target_days_per_year).with_as_of(as_of);
    let tracker = TimeOffTracker::from_source(config, source.as_ref(), &window)
        .with_context(|| format!("Failed to build report from {}", cli.calendar.display()))?;

    let report = Report::from(&tracker);
    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &Report) {
    for line in &report.lines {
        if line.muted {
            println!("{}", line.to_string().dimmed());
        } else {
            println!("{}", line);
        }
    }
    if !report.lines.is_empty() {
        println!();
    }
    println!("Total used: {}", report.total_used);
    println!("Budget: {}", report.budget);

    let remaining = format!("Remaining: {}", report.remaining);
    if report.remaining < 0 {
        println!("{}", remaining.red());
    } else {
        println!("{}", remaining);
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "timeoff=debug,timeoff_engine=debug"
    } else {
        "timeoff=warn,timeoff_engine=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn end_of_year(date: NaiveDate) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), 12, 31)
        .with_context(|| format!("No December 31st in year {}", date.year()))
}
