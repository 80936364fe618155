use clap::Parser;
use demo_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Run the selected command synchronously; parsing blocks until the
    // external backend completes.
    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Demo Processor - CS:GO Replay Data Extractor");
    println!("============================================");
    println!();
    println!("Parse CS:GO demo (replay) files into round and frame data by driving");
    println!("an external demo-parser backend.");
    println!();
    println!("USAGE:");
    println!("    demo-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse a demo file and print keys, rounds, and frame ticks");
    println!("    rounds      Print a per-round summary table for a demo file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Parse a demo at the default rate (one frame every 128 ticks):");
    println!("    demo-processor parse fixtures/default.dem");
    println!();
    println!("    # Collect denser frames and print every sampled tick:");
    println!("    demo-processor parse fixtures/default.dem --parse-rate 64 --ticks");
    println!();
    println!("    # Per-round summary as JSON, with an explicit backend binary:");
    println!("    demo-processor rounds fixtures/default.dem --output-format json \\");
    println!("                          --parser-bin /usr/local/bin/csgo-demoparser");
    println!();
    println!("For detailed help on any command, use:");
    println!("    demo-processor <COMMAND> --help");
}
