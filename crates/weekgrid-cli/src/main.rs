//! `weekgrid` CLI — lay out all-day events onto a 7-column week grid.
//!
//! ## Usage
//!
//! ```sh
//! # Position events for the week containing a date (stdin → stdout)
//! cat tasks.json | weekgrid layout --date 2025-10-08
//!
//! # Use an explicit week start instead of rounding to Monday
//! weekgrid layout -i tasks.json --week 2025-10-06
//!
//! # Events stored as UTC instants, viewed from a named zone
//! weekgrid layout -i tasks.json --date 2025-10-08 --timezone Europe/Brussels
//!
//! # Draw the packed week as ASCII bars
//! weekgrid render -i tasks.json --date 2025-10-08
//!
//! # Show placement statistics
//! weekgrid stats -i tasks.json --date 2025-10-08
//! ```
//!
//! Input is a JSON array of `{id, title, start, end}` records. `start` and
//! `end` accept RFC 3339 instants (projected into `--timezone`, default
//! UTC), bare ISO datetimes (taken as wall clock), or bare dates (midnight).

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::io::{self, Read};
use weekgrid::{layout_week, wall_clock, zone, Event, WeekLayout, WeekWindow};

/// Characters per day column in `render` output.
const CELL_WIDTH: usize = 12;

#[derive(Parser)]
#[command(
    name = "weekgrid",
    version,
    about = "All-day event layout for calendar week grids"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the positioned layout as JSON
    Layout {
        /// Input events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Week start date, YYYY-MM-DD, used as given
        #[arg(long)]
        week: Option<String>,
        /// Any date, YYYY-MM-DD; its Monday-based week is used
        #[arg(long)]
        date: Option<String>,
        /// IANA timezone for projecting RFC 3339 instants (default UTC)
        #[arg(long)]
        timezone: Option<String>,
    },
    /// Draw the packed week as an ASCII grid
    Render {
        /// Input events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Week start date, YYYY-MM-DD, used as given
        #[arg(long)]
        week: Option<String>,
        /// Any date, YYYY-MM-DD; its Monday-based week is used
        #[arg(long)]
        date: Option<String>,
        /// IANA timezone for projecting RFC 3339 instants (default UTC)
        #[arg(long)]
        timezone: Option<String>,
    },
    /// Show placement statistics (events in, placed, dropped, rows)
    Stats {
        /// Input events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Week start date, YYYY-MM-DD, used as given
        #[arg(long)]
        week: Option<String>,
        /// Any date, YYYY-MM-DD; its Monday-based week is used
        #[arg(long)]
        date: Option<String>,
        /// IANA timezone for projecting RFC 3339 instants (default UTC)
        #[arg(long)]
        timezone: Option<String>,
    },
}

/// Wire format for one input event; datetimes arrive as strings.
#[derive(Deserialize)]
struct EventInput {
    id: String,
    title: String,
    start: String,
    end: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Layout {
            input,
            output,
            week,
            date,
            timezone,
        } => {
            let window = resolve_window(week.as_deref(), date.as_deref())?;
            let events = read_events(input.as_deref(), timezone.as_deref())?;
            let layout = layout_week(&events, &window);
            let json =
                serde_json::to_string_pretty(&layout).context("Failed to serialize layout")?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Render {
            input,
            week,
            date,
            timezone,
        } => {
            let window = resolve_window(week.as_deref(), date.as_deref())?;
            let events = read_events(input.as_deref(), timezone.as_deref())?;
            let layout = layout_week(&events, &window);
            print!("{}", render_grid(&window, &layout));
        }
        Commands::Stats {
            input,
            week,
            date,
            timezone,
        } => {
            let window = resolve_window(week.as_deref(), date.as_deref())?;
            let events = read_events(input.as_deref(), timezone.as_deref())?;
            let layout = layout_week(&events, &window);
            println!("Events in:  {}", events.len());
            println!("Placed:     {}", layout.events.len());
            println!("Dropped:    {}", events.len() - layout.events.len());
            println!("Rows used:  {}", layout.row_count);
        }
    }

    Ok(())
}

/// Build the week window from `--week` (used as given) or `--date`
/// (rounded back to its Monday). Exactly one must be present.
fn resolve_window(week: Option<&str>, date: Option<&str>) -> Result<WeekWindow> {
    match (week, date) {
        (Some(w), None) => Ok(WeekWindow::starting(parse_date(w)?)),
        (None, Some(d)) => Ok(WeekWindow::containing(parse_date(d)?)),
        (Some(_), Some(_)) => bail!("--week and --date are mutually exclusive"),
        (None, None) => bail!("one of --week or --date is required"),
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("Invalid date: '{}'", s))
}

/// Parse an event datetime string.
///
/// RFC 3339 values are instants and get projected onto `tz`'s wall clock;
/// bare ISO datetimes are taken as wall clock already; bare dates mean
/// midnight.
fn parse_event_datetime(s: &str, tz: Tz) -> Result<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(wall_clock(dt.with_timezone(&Utc), tz));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(ndt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(NaiveDateTime::from)
        .with_context(|| format!("Invalid datetime: '{}'", s))
}

/// Read and decode the events JSON from a file or stdin.
fn read_events(path: Option<&str>, timezone: Option<&str>) -> Result<Vec<Event>> {
    let tz = match timezone {
        Some(name) => zone(name)?,
        None => chrono_tz::UTC,
    };

    let raw = read_input(path)?;
    let inputs: Vec<EventInput> =
        serde_json::from_str(&raw).context("Failed to parse events JSON")?;

    inputs
        .into_iter()
        .map(|e| {
            Ok(Event {
                start: parse_event_datetime(&e.start, tz)
                    .with_context(|| format!("Event '{}'", e.id))?,
                end: parse_event_datetime(&e.end, tz)
                    .with_context(|| format!("Event '{}'", e.id))?,
                id: e.id,
                title: e.title,
            })
        })
        .collect()
}

/// Draw the packed layout: a header of day columns, then one line per row
/// with `[...]` bars. Truncated edges are drawn as `<` / `>`.
fn render_grid(window: &WeekWindow, layout: &WeekLayout) -> String {
    let mut out = String::new();

    for i in 0..7 {
        let label = window.day(i).format("%a %d").to_string();
        out.push_str(&format!("{:<width$}", label, width = CELL_WIDTH));
    }
    out.push('\n');

    for row in 0..layout.row_count {
        let mut line = vec![' '; 7 * CELL_WIDTH];
        for e in layout.events.iter().filter(|e| e.row == row) {
            let from = (e.col_start as usize - 1) * CELL_WIDTH;
            // Leave one space before the next bar.
            let width = e.span as usize * CELL_WIDTH - 1;

            let mut bar = String::with_capacity(width);
            bar.push(if e.visual_start { '[' } else { '<' });
            let body_width = width - 2;
            let mut title: String = e.event.title.chars().take(body_width).collect();
            while title.chars().count() < body_width {
                title.push(' ');
            }
            bar.push_str(&title);
            bar.push(if e.visual_end { ']' } else { '>' });

            for (offset, ch) in bar.chars().enumerate() {
                line[from + offset] = ch;
            }
        }
        let text: String = line.into_iter().collect();
        out.push_str(text.trim_end());
        out.push('\n');
    }

    out
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
