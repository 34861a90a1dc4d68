//! Generate command implementation
//!
//! Runs the full pipeline as one linear pass: read the registration
//! sheet, normalize every row, sort, render, write the CSV.

use crate::cli::Cli;
use crate::domain::normalize_rows;
use crate::error::Result;
use crate::startlist::{render_rows, session_split, sort_athletes, SortMode};
use crate::{sheet, writer};
use chrono::{Datelike, Local};

/// Execute the generate command
pub fn run_generate(cli: &Cli) -> Result<()> {
    let raw_rows = sheet::read_rows(&cli.input_file)?;
    log::debug!(
        "read {} registration rows from {}",
        raw_rows.len(),
        cli.input_file.display()
    );

    let current_year = Local::now().year();
    let mut athletes = normalize_rows(&raw_rows, current_year)?;

    let mode = if cli.sort_by_categories {
        SortMode::ByWeightClass
    } else {
        SortMode::ByOpener
    };
    sort_athletes(&mut athletes, mode);
    log::debug!(
        "sorted {} athletes ({:?}), session split at offset {}",
        athletes.len(),
        mode,
        session_split(&athletes)
    );

    let rows = render_rows(&athletes);
    let written = writer::write_start_list(&cli.output_file, &rows)?;
    log::info!("wrote {} rows", rows.len());
    println!("{} file written.", written.display());

    Ok(())
}
