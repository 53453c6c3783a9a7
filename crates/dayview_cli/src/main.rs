//! Command-line entry point for laying out one day of events.
//!
//! # Responsibility
//! - Read event configurations as JSON and lay them out on a day view.
//! - Print the resulting per-event placement as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use dayview_core::{
    default_log_level, init_logging, CalendarService, ContainerGeometry, EventConfig, LayoutRecord,
    StyleTable, DEFAULT_MINUTES_IN_VIEW,
};
use log::info;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

/// Lay out a day of calendar events into side-by-side lanes.
#[derive(Parser, Debug)]
#[command(name = "dayview")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with an array of `{"start": .., "end": ..}` objects (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Calendar view to lay out
    #[arg(long, default_value = "day")]
    view: String,

    /// Container height in pixels
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Container width in pixels
    #[arg(long, default_value_t = 620.0)]
    width: f64,

    /// Horizontal padding on each side of the container
    #[arg(long, default_value_t = 10.0)]
    padding_left: f64,

    /// Top padding of the container
    #[arg(long, default_value_t = 0.0)]
    padding_top: f64,

    /// Minutes spanned by the container height
    #[arg(long, default_value_t = DEFAULT_MINUTES_IN_VIEW)]
    minutes_in_view: u32,

    /// Absolute directory for rolling log files (logging disabled when omitted)
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

/// One laid-out event as printed by the CLI.
#[derive(Debug, Serialize)]
struct EventLayout {
    id: usize,
    start: u32,
    end: u32,
    column: usize,
    lane_count: usize,
    top: f64,
    height: f64,
    left: f64,
    width: f64,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    let configs = read_configs(args.input.as_ref())?;
    let geometry = ContainerGeometry::new(
        args.height,
        args.width,
        args.padding_left,
        args.padding_top,
    )
    .and_then(|geometry| geometry.with_minutes_in_view(args.minutes_in_view))
    .context("invalid container geometry")?;

    let mut calendar = CalendarService::with_view(&args.view, geometry)?;
    let mut table = StyleTable::new();
    calendar.create_events(&configs, &mut table)?;

    let records = calendar.view().map(|engine| engine.records()).unwrap_or_default();
    let layouts = records
        .iter()
        .map(|record| to_layout(record, &table))
        .collect::<Result<Vec<_>>>()?;
    info!("event=cli_layout module=cli status=ok events={}", layouts.len());

    let output = if args.pretty {
        serde_json::to_string_pretty(&layouts)?
    } else {
        serde_json::to_string(&layouts)?
    };
    println!("{output}");
    Ok(())
}

fn read_configs(input: Option<&PathBuf>) -> Result<Vec<EventConfig>> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };
    serde_json::from_str(&raw).context("input must be a JSON array of event configurations")
}

fn to_layout(record: &LayoutRecord, table: &StyleTable) -> Result<EventLayout> {
    let style = table
        .style(record.id())
        .with_context(|| format!("event {} was never styled", record.id()))?;
    let interval = record.interval();
    Ok(EventLayout {
        id: record.id().index(),
        start: interval.start(),
        end: interval.end(),
        column: record.column(),
        lane_count: record.lane_count(),
        top: style.top,
        height: style.height,
        left: style.left,
        width: style.width,
    })
}
