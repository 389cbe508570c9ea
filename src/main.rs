use clap::Parser;
use menu_csv::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, stopping");
                process::exit(130)
            }
        }
    });

    match result {
        Ok(_stats) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Menu CSV - Restaurant Menu Export Parser");
    println!("========================================");
    println!();
    println!("Parse restaurant menu CSV exports into categories of priced items.");
    println!();
    println!("USAGE:");
    println!("    menu-csv <COMMAND> [OPTIONS] <FILE>...");
    println!();
    println!("COMMANDS:");
    println!("    preview     Parse exports and print the resulting menu");
    println!("    validate    Parse exports and report whether they are valid");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Preview a menu export as a table:");
    println!("    menu-csv preview menu.csv");
    println!();
    println!("    # Emit the parsed menu as JSON:");
    println!("    menu-csv preview menu.csv --format json");
    println!();
    println!("    # Check several exports with a different title block size:");
    println!("    menu-csv validate lunch.csv dinner.csv --preamble-rows 3");
    println!();
    println!("For detailed help on any command, use:");
    println!("    menu-csv <COMMAND> --help");
}
