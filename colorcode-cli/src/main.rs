//! Look up pairs of the 25-pair color code from the command line.
//!
//! ```bash
//! colorcode pair 14
//! colorcode number Yellow Green --json
//! colorcode manual
//! ```

mod config;

use anyhow::{Context, Result};
use colorcode::{
    Color, ColorPair, ManualEntry, ManualOptions, PairColorMapper,
    format_manual,
};
use env_logger::Env;
use log::{debug, info};
use serde::Serialize;

use crate::config::{CliConfig, Command, FORMAT_ENV, OutputFormat};

const USAGE: &str = "\
usage: colorcode [--json] <command>

commands:
  pair <number>           print the colors of a pair number
  number <major> <minor>  print the pair number of two colors
  manual                  print the full color code table";

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let config = CliConfig::from_env()?;
    debug!("resolved config: {config:?}");

    let output = run(&config, &PairColorMapper::default())?;
    println!("{output}");
    Ok(())
}

#[derive(Serialize)]
struct NumberOutput {
    pair_number: u32,
    pair: ColorPair,
}

fn run(config: &CliConfig, mapper: &PairColorMapper<'_>) -> Result<String> {
    match &config.command {
        Command::Help => Ok(format!(
            "{USAGE}\n\nSet {FORMAT_ENV}=json or pass --json for JSON output."
        )),
        Command::Pair(raw) => {
            let pair_number = raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("invalid pair number: {raw}"))?;
            let pair = mapper
                .color_from_pair_number(pair_number)
                .context("failed to map pair number")?;
            info!("[In]Pair Number: {pair_number}, [Out] Colors: {pair}");

            render(config.format, &pair, || pair.to_string())
        },
        Command::Number { major, minor } => {
            let pair = ColorPair::new(
                parse_color(major, "major")?,
                parse_color(minor, "minor")?,
            );
            let pair_number = mapper
                .pair_number_from_color(pair)
                .context("failed to resolve color pair")?;
            info!("[In]Colors: {pair}, [Out] PairNumber: {pair_number}");

            render(
                config.format,
                &NumberOutput { pair_number, pair },
                || pair_number.to_string(),
            )
        },
        Command::Manual => {
            let entries: Vec<ManualEntry> = mapper.entries().collect();
            render(config.format, &entries, || {
                format_manual(mapper, &ManualOptions::default())
                    .trim_end()
                    .to_string()
            })
        },
    }
}

fn parse_color(raw: &str, role: &str) -> Result<Color> {
    raw.parse::<Color>()
        .with_context(|| format!("invalid {role} color: {raw}"))
}

fn render<T, F>(format: OutputFormat, value: &T, text: F) -> Result<String>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    match format {
        OutputFormat::Text => Ok(text()),
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .context("failed to serialize output"),
    }
}
