//! Command-line argument definitions for the `daylayout` CLI.

use clap::{Parser, ValueEnum};

/// Lay out a day's calendar events and render them
#[derive(Parser, Debug)]
#[command(name = "daylayout", author, version, about, long_about = None)]
pub struct Args {
    /// JSON file with an array of {"start", "end"} events; `-` or omitted reads stdin
    pub input: Option<String>,

    /// Output file; omitted writes to stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Reject events whose start is not before their end
    #[arg(long)]
    pub strict: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// What the CLI writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Self-contained HTML day view
    Html,
    /// Placement records as JSON
    Json,
}
