//! CLI logic for the `daylayout` tool.
//!
//! Reads events as JSON, lays them out with [`day_layout`], and writes either
//! an HTML day view or the placement records as JSON.

pub mod config;
pub mod html;

mod args;

pub use args::{Args, Format};

use std::{
    fs,
    io::{self, Read, Write},
};

use anyhow::{Context, Result};
use log::{debug, info};

use day_layout::{
    lay_out_day_with_options, parse_events, render_placements, summarize, LayoutOptions,
    Validation,
};

use crate::config::AppConfig;
use crate::html::HtmlRenderer;

/// Run the CLI with parsed arguments.
///
/// # Errors
///
/// Fails on unreadable input or config, malformed JSON, events rejected by
/// `--strict`, or an unwritable output.
pub fn run(args: &Args) -> Result<()> {
    let config = config::load_config(args.config.as_ref()).context("loading configuration")?;
    let source = read_input(args.input.as_deref())?;
    let output = render(&source, args.format, &config, args.strict)?;

    match args.output.as_deref() {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("writing {path}"))?;
            info!(output_path = path; "Wrote day view");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .context("writing to stdout")?;
            stdout.flush().context("writing to stdout")?;
        }
    }
    Ok(())
}

/// Lay out the events in `source` and render them in `format`.
///
/// # Errors
///
/// Fails if `source` is not a JSON event array or, with `strict`, if any
/// event has `start >= end`.
pub fn render(source: &str, format: Format, config: &AppConfig, strict: bool) -> Result<String> {
    let events = parse_events(source).context("reading events")?;
    let options = LayoutOptions {
        validation: if strict {
            Validation::Strict
        } else {
            Validation::Permissive
        },
        pixels_per_minute: config.render().pixels_per_minute(),
    };
    let placements = lay_out_day_with_options(&events, &options)?;

    let stats = summarize(&placements);
    info!(events = stats.events, groups = stats.groups, columns = stats.columns; "Laid out events");

    match format {
        Format::Json => {
            let mut json =
                serde_json::to_string_pretty(&placements).context("serializing placements")?;
            json.push('\n');
            Ok(json)
        }
        Format::Html => {
            let mut renderer = HtmlRenderer::new(config.render());
            render_placements(&placements, &mut renderer).context("rendering HTML")?;
            debug!(slots = renderer.rendered(); "Rendered slots");
            Ok(renderer.into_document().context("rendering HTML")?)
        }
    }
}

fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        None | Some("-") => {
            debug!("Reading events from stdin");
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("reading stdin")?;
            Ok(source)
        }
        Some(path) => {
            info!(input_path = path; "Reading events");
            fs::read_to_string(path).with_context(|| format!("reading {path}"))
        }
    }
}
