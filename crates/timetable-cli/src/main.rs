//! Timetable CLI - spreadsheet timetables to JSON events
//!
//! Reads a workbook whose sheets lay rooms out as column headers and times of
//! day as row labels, anchors each requested sheet to a calendar date, and
//! prints the extracted events as a JSON array on stdout. Diagnostics go to
//! stderr so the output stays pipeable.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use timetable_core::{extract_sheet, EventIdGen, PlanEntry, TimetableEvent};
use timetable_xlsx::Workbook;

/// Convert a spreadsheet timetable into a JSON list of timestamped events
#[derive(Debug, Parser)]
#[command(
    name = "timetable",
    version,
    about = "Convert a spreadsheet timetable into a JSON list of timestamped events",
    after_help = "Example:\n  timetable --file program.xlsx \\\n    --date \"Saturday:2025-09-06\" --date \"Sunday:2025-09-07\""
)]
struct Cli {
    /// Path to the .xlsx workbook
    #[arg(long, value_name = "FILE")]
    file: PathBuf,

    /// Sheet to extract and the date its time labels are anchored to, as
    /// "<sheet name>:<YYYY-MM-DD>". Repeatable; sheets are processed in the
    /// order given, and a sheet may be named more than once
    #[arg(long = "date", value_name = "SHEET:DATE", value_parser = PlanEntry::parse)]
    dates: Vec<PlanEntry>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let events = run(&cli)?;

    let json = if cli.compact {
        serde_json::to_string(&events).context("serializing events")?
    } else {
        serde_json::to_string_pretty(&events).context("serializing events")?
    };
    println!("{json}");

    Ok(())
}

/// Process the run plan strictly in input order: ids and per-column rollover
/// state both depend on it.
fn run(cli: &Cli) -> Result<Vec<TimetableEvent>> {
    let mut workbook =
        Workbook::open(&cli.file).with_context(|| format!("opening {}", cli.file.display()))?;

    let mut ids = EventIdGen::new();
    let mut events = Vec::new();

    for entry in &cli.dates {
        let sheet = workbook
            .sheet(&entry.sheet)
            .with_context(|| format!("loading sheet \"{}\"", entry.sheet))?;

        let batch = extract_sheet(&entry.sheet, &sheet, entry.anchor, &mut ids)
            .with_context(|| format!("extracting events from \"{}\"", entry.sheet))?;

        log::info!(
            "{}: {} events anchored to {}",
            entry.sheet,
            batch.len(),
            entry.anchor
        );
        events.extend(batch);
    }

    Ok(events)
}
