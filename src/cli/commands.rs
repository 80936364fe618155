//! Command implementations for demo processor CLI
//!
//! This module contains the main command execution logic, progress reporting,
//! and error handling for the CLI interface.

use colored::Colorize;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::app::services::demo_parser::{CsgoParser, ExternalBackend, ReplayParser};
use crate::cli::args::{Args, Commands, OutputFormat, ParseArgs, RoundsArgs};
use crate::config::ParserConfig;
use crate::constants::keys;
use crate::{ParsedReplay, Result};

/// Summary of one parsed game round, for reporting
#[derive(Debug, Clone, Serialize)]
pub struct RoundSummary {
    /// Zero-based index of the round in the demo
    pub index: usize,
    /// Terminal outcome reason, if the backend reported one
    pub end_reason: Option<String>,
    /// Official ending tick, if the backend reported one
    pub end_official_tick: Option<u64>,
    /// Ticks of the sampled frames in this round
    pub ticks: Vec<u64>,
}

/// Main command runner for demo processor
///
/// This function orchestrates the workflow for the selected subcommand:
/// 1. Set up logging and validate arguments
/// 2. Parse the demo with progress reporting
/// 3. Print the requested report
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Parse(parse_args) => run_parse(parse_args),
        Commands::Rounds(rounds_args) => run_rounds(rounds_args),
    }
}

/// Execute the parse command
fn run_parse(args: ParseArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting demo processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let data = parse_demo(
        &args.demo_path,
        args.parse_rate,
        args.parser_bin.as_deref(),
        args.show_progress(),
    )?;

    match args.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        OutputFormat::Human => {
            print_parse_report(&data, args.show_ticks);
        }
    }

    Ok(())
}

/// Execute the rounds command
fn run_rounds(args: RoundsArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting demo processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let data = parse_demo(
        &args.demo_path,
        args.parse_rate,
        args.parser_bin.as_deref(),
        args.show_progress(),
    )?;

    let summaries = summarize_rounds(&data);

    match args.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        OutputFormat::Human => {
            print_rounds_report(&summaries);
        }
    }

    Ok(())
}

/// Parse a demo file with an optional progress spinner
///
/// The parse is synchronous and blocking; the spinner only signals that the
/// external backend is still running.
fn parse_demo(
    demo_path: &std::path::Path,
    parse_rate: u32,
    parser_bin: Option<&std::path::Path>,
    show_progress: bool,
) -> Result<ParsedReplay> {
    let start_time = Instant::now();

    let backend = match parser_bin {
        Some(program) => ExternalBackend::new(program),
        None => ExternalBackend::default(),
    };
    debug!("Using demo-parser backend: {}", backend.program().display());

    let config = ParserConfig::default().with_parse_rate(parse_rate);
    let mut parser = CsgoParser::with_backend(backend, config);

    let spinner = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap(),
        );
        pb.set_message(format!("Parsing {}", demo_path.display()));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let result = parser.parse(demo_path);

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    result?;

    info!("Parse finished in {}", HumanDuration(start_time.elapsed()));

    // parse() succeeded, so parsed data is guaranteed present.
    let data = parser
        .parsed_data()
        .cloned()
        .expect("parsed data present after successful parse");
    Ok(data)
}

/// Extract per-round summaries from the opaque parsed mapping
///
/// The mapping is the backend's own structure; keys it did not emit are
/// simply reported as absent rather than treated as errors.
pub fn summarize_rounds(data: &ParsedReplay) -> Vec<RoundSummary> {
    let Some(rounds) = data.game_rounds() else {
        warn!("Parsed demo has no '{}' key", keys::GAME_ROUNDS);
        return Vec::new();
    };

    rounds
        .iter()
        .enumerate()
        .map(|(index, round)| {
            let ticks = round
                .get(keys::FRAMES)
                .and_then(Value::as_array)
                .map(|frames| {
                    frames
                        .iter()
                        .filter_map(|frame| frame.get(keys::TICK).and_then(Value::as_u64))
                        .collect()
                })
                .unwrap_or_default();

            RoundSummary {
                index,
                end_reason: round
                    .get(keys::ROUND_END_REASON)
                    .and_then(Value::as_str)
                    .map(str::to_string),
                end_official_tick: round.get(keys::END_OFFICIAL_TICK).and_then(Value::as_u64),
                ticks,
            }
        })
        .collect()
}

/// Print the human-readable parse report (keys, rounds, optional frame ticks)
fn print_parse_report(data: &ParsedReplay, show_ticks: bool) {
    let key_list: Vec<&str> = data.keys().map(String::as_str).collect();
    println!("{} {}", "Keys:".bold(), key_list.join(", "));

    let summaries = summarize_rounds(data);
    println!("{} {}", "Rounds:".bold(), summaries.len());

    for summary in &summaries {
        println!(
            "Round {:>2}: {} = {}, {} = {}, {} frames",
            summary.index,
            keys::ROUND_END_REASON,
            summary.end_reason.as_deref().unwrap_or("-"),
            keys::END_OFFICIAL_TICK,
            summary
                .end_official_tick
                .map_or_else(|| "-".to_string(), |t| t.to_string()),
            summary.ticks.len()
        );

        if show_ticks {
            for tick in &summary.ticks {
                println!("  {}", tick);
            }
        }
    }
}

/// Print the human-readable per-round summary table
fn print_rounds_report(summaries: &[RoundSummary]) {
    if summaries.is_empty() {
        println!("No rounds found in demo");
        return;
    }

    println!(
        "{}",
        format!(
            "{:>5}  {:<24} {:>14} {:>8}",
            "round", "end reason", "official tick", "frames"
        )
        .bold()
    );

    for summary in summaries {
        println!(
            "{:>5}  {:<24} {:>14} {:>8}",
            summary.index,
            summary.end_reason.as_deref().unwrap_or("-"),
            summary
                .end_official_tick
                .map_or_else(|| "-".to_string(), |t| t.to_string()),
            summary.ticks.len()
        );
    }
}

/// Set up logging based on command line arguments
fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("demo_processor={}", log_level)));

    // Set up subscriber based on output format preference
    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
