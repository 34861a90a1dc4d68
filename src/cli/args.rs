//! CLI argument definitions using clap derive

use clap::Parser;
use std::path::PathBuf;

/// Start-list generator for weightlifting meets
///
/// Reads athlete registrations from the first sheet of a spreadsheet
/// and writes a printable start-list CSV, one session per gender,
/// ordered by opening snatch weight.
#[derive(Parser, Debug)]
#[command(name = "genstartlist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the registration spreadsheet (first sheet is read)
    #[arg(short = 'i', long = "input_file", value_name = "PATH")]
    pub input_file: PathBuf,

    /// Group each session by weight class before snatch opener
    #[arg(short = 'c', long = "sort_by_categories")]
    pub sort_by_categories: bool,

    /// Destination CSV path (".csv" is appended if missing)
    #[arg(
        short = 'o',
        long = "output_file",
        value_name = "PATH",
        default_value = "./files/startList.csv"
    )]
    pub output_file: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
