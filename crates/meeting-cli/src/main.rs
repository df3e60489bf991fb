//! `meetq` CLI — find the free slots in a day where a meeting fits.
//!
//! ## Usage
//!
//! ```sh
//! # Read a calendar document from stdin, print slots as JSON
//! cat day.json | meetq query
//!
//! # Read from file, write to file
//! meetq query -i day.json -o slots.json
//!
//! # Human-readable output, overriding the requested duration
//! meetq query -i day.json --format text --duration 45
//!
//! # Show how each pass narrows the day
//! meetq --debug query -i day.json
//! ```
//!
//! The input document holds the day's events and the meeting request:
//!
//! ```json
//! {
//!   "events": [
//!     {"title": "Standup", "when": {"start": 540, "end": 560}, "attendees": ["alice"]}
//!   ],
//!   "request": {"attendees": ["alice"], "optional_attendees": ["bob"], "duration": 30}
//! }
//! ```

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_core::{find_meeting_slots, Event, MeetingRequest, TimeRange};
use serde::Deserialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "meetq",
    version,
    about = "Find free meeting slots in a day of calendar events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the slots where the requested meeting fits
    Query {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Meeting length in minutes, replacing the request's duration
        #[arg(long)]
        duration: Option<u32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// JSON array of `{"start", "end"}` objects
    Json,
    /// One `HH:MM-HH:MM (N min)` line per slot
    Text,
}

/// A day of calendar events plus the meeting to fit into it.
#[derive(Deserialize)]
struct QueryInput {
    #[serde(default)]
    events: Vec<Event>,
    request: MeetingRequest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Commands::Query {
            input,
            output,
            format,
            duration,
        } => {
            let raw = read_input(input.as_deref())?;
            let mut doc: QueryInput =
                serde_json::from_str(&raw).context("Failed to parse query input JSON")?;

            if let Some(minutes) = duration {
                doc.request.duration = minutes;
            }
            doc.request
                .validate()
                .context("Meeting request is not schedulable")?;

            info!(
                events = doc.events.len(),
                duration = doc.request.duration,
                "running meeting query"
            );
            let slots = find_meeting_slots(&doc.events, &doc.request);
            debug!(slots = slots.len(), "query finished");

            let rendered = match format {
                Format::Json => serde_json::to_string_pretty(&slots)?,
                Format::Text => render_text(&slots),
            };
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

/// `--debug` wins; otherwise honor `RUST_LOG`, defaulting to warnings only.
/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn render_text(slots: &[TimeRange]) -> String {
    slots
        .iter()
        .map(|slot| {
            format!(
                "{}-{} ({} min)\n",
                clock(slot.start()),
                clock(slot.end()),
                slot.duration()
            )
        })
        .collect()
}

fn clock(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
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
