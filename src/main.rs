use clap::Parser;
use posti_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            // Success - output has already been produced by the command
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
    println!("Posti Processor - Finnish Postal Code Data Tool");
    println!("===============================================");
    println!();
    println!("Build a deduplicated, cross-referenced model of Finnish postal codes,");
    println!("municipalities and administrative regions from Posti's fixed-width");
    println!("PCF/BAF data files, and render deterministic reports from it.");
    println!();
    println!("USAGE:");
    println!("    posti-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    report      Render the region/municipality/postal code report (main command)");
    println!("    stats       Summarize the ingested data set");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Report the postal codes of the newest data files in ./data:");
    println!("    posti-processor report --input ./data");
    println!();
    println!("    # Include PO boxes and other special codes, write JSON to a file:");
    println!("    posti-processor report --input ./data --include-special \\");
    println!("                           --output-format json --output-file report.json");
    println!();
    println!("    # Summarize the data set:");
    println!("    posti-processor stats --input ./data");
    println!();
    println!("For detailed help on any command, use:");
    println!("    posti-processor <COMMAND> --help");
}
