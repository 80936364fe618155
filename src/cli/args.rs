//! Command-line argument definitions for demo processor
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::constants::{DEFAULT_PARSE_RATE, SUPPORTED_PARSE_RATES};
use crate::{Error, ParserConfig, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the CS:GO demo processor
///
/// Parses CS:GO demo (replay) files into round and frame data by delegating
/// to an external demo-parser backend, and reports the results on stdout.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "demo-processor",
    version,
    about = "Parse CS:GO demo files into round and frame data",
    long_about = "A tool that parses CS:GO demo (replay) files by driving an external \
                  demo-parser backend and reports the parsed round and frame data. The \
                  backend decodes the binary demo format and emits the full match as \
                  JSON; this tool exposes that data unchanged."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the demo processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a demo file and print its keys, rounds, and frame ticks
    Parse(ParseArgs),
    /// Print a per-round summary table for a demo file
    Rounds(RoundsArgs),
}

/// Arguments for the parse command (main demo parsing)
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Path to the demo file to parse
    ///
    /// CS:GO demo files end in .dem and are recorded per-tick match replays.
    #[arg(value_name = "DEMO", help = "Path to the demo file (.dem) to parse")]
    pub demo_path: PathBuf,

    /// Spacing in ticks between parsed demo frames
    ///
    /// One of 128, 64, 32, 16, 8, 4, 2, or 1. The lower the value, the more
    /// frames are collected, at proportionally higher processing cost.
    /// Do not set this to 1 unless you want a lot of data and a long wait.
    #[arg(
        short = 'r',
        long = "parse-rate",
        value_name = "TICKS",
        default_value_t = DEFAULT_PARSE_RATE,
        help = "Ticks between parsed frames (128, 64, 32, 16, 8, 4, 2, or 1)"
    )]
    pub parse_rate: u32,

    /// Path to the external demo-parser executable
    ///
    /// If not specified, the default executable name is resolved through PATH.
    #[arg(
        long = "parser-bin",
        value_name = "PATH",
        help = "Path to the external demo-parser executable"
    )]
    pub parser_bin: Option<PathBuf>,

    /// Print the tick of every sampled frame in every round
    ///
    /// By default only per-round summaries are printed; frame tick listings
    /// can get long at low parse rates.
    #[arg(long = "ticks", help = "Print every sampled frame tick per round")]
    pub show_ticks: bool,

    /// Output format for machine-readable results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the rounds command (per-round summary report)
#[derive(Debug, Clone, Parser)]
pub struct RoundsArgs {
    /// Path to the demo file to parse
    #[arg(value_name = "DEMO", help = "Path to the demo file (.dem) to parse")]
    pub demo_path: PathBuf,

    /// Spacing in ticks between parsed demo frames
    #[arg(
        short = 'r',
        long = "parse-rate",
        value_name = "TICKS",
        default_value_t = DEFAULT_PARSE_RATE,
        help = "Ticks between parsed frames (128, 64, 32, 16, 8, 4, 2, or 1)"
    )]
    pub parse_rate: u32,

    /// Path to the external demo-parser executable
    #[arg(
        long = "parser-bin",
        value_name = "PATH",
        help = "Path to the external demo-parser executable"
    )]
    pub parser_bin: Option<PathBuf>,

    /// Output format for the round report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the round report"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

/// Validate a demo path and parse rate from the command line
///
/// The library itself passes the parse rate through unvalidated; user input
/// is checked here at the CLI boundary instead.
fn validate_demo_args(demo_path: &PathBuf, parse_rate: u32) -> Result<()> {
    if !demo_path.exists() {
        return Err(Error::configuration(format!(
            "Demo path does not exist: {}",
            demo_path.display()
        )));
    }

    if !demo_path.is_file() {
        return Err(Error::configuration(format!(
            "Demo path is not a file: {}",
            demo_path.display()
        )));
    }

    if !ParserConfig::is_supported_rate(parse_rate) {
        return Err(Error::configuration(format!(
            "Unsupported parse rate {} (expected one of {:?})",
            parse_rate, SUPPORTED_PARSE_RATES
        )));
    }

    Ok(())
}

/// Determine a log level string from verbosity and quiet flags
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl ParseArgs {
    /// Validate the parse command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_demo_args(&self.demo_path, self.parse_rate)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Check if we should show a progress spinner (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl RoundsArgs {
    /// Validate the rounds command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_demo_args(&self.demo_path, self.parse_rate)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Check if we should show a progress spinner (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
