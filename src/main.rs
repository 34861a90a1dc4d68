//! genstartlist - competition start-list generator
//!
//! A command-line tool that converts a weightlifting meet registration
//! spreadsheet into a printable start-list CSV.

use clap::error::ErrorKind;
use clap::Parser;
use genstartlist::cli::Cli;
use genstartlist::commands::run_generate;
use genstartlist::error::{AppError, ReadError};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments. clap exits with 2 on usage errors by
    // default; this tool's contract is exit code 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    if let Err(e) = run_generate(&cli) {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Read(ReadError::Open { .. }) => {
            eprintln!();
            eprintln!("Hint: Check that the path points at a readable .xlsx workbook.");
        }
        AppError::Read(ReadError::MissingColumn(_)) => {
            eprintln!();
            eprintln!("Hint: The first sheet's header row must contain the columns");
            eprintln!("      gender, category, birthYear, snatchOpener, cjOpener,");
            eprintln!("      usawID, firstName, lastName, club, coach.");
        }
        AppError::Validation(_) => {
            eprintln!();
            eprintln!("Hint: Fix the listed rows in the registration sheet and rerun.");
        }
        _ => {}
    }
}
