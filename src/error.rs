//! Unified error types for genstartlist
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error while reading the registration spreadsheet
    #[error("read error: {0}")]
    Read(#[from] ReadError),

    /// One or more rows failed normalization
    #[error("{0}")]
    Validation(#[from] ValidationReport),

    /// Error while writing the start-list CSV
    #[error("write error: {0}")]
    Write(#[from] WriteError),
}

/// Errors from reading the registration spreadsheet
#[derive(Error, Debug)]
pub enum ReadError {
    /// Workbook could not be opened or decoded
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: calamine::XlsxError,
    },

    /// Workbook contains no sheets
    #[error("workbook has no sheets")]
    NoSheets,

    /// First sheet has no rows at all (registration info must be in the first sheet)
    #[error("first sheet is empty")]
    EmptySheet,

    /// A required column is missing from the header row
    #[error("missing required column {0:?} in the header row")]
    MissingColumn(&'static str),
}

/// A single row that failed normalization, tagged with its
/// 1-based spreadsheet row number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("row {row}: {source}")]
pub struct RowError {
    pub row: usize,
    #[source]
    pub source: DomainError,
}

/// Errors from domain value validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Gender cell is not one of m/male/f/female
    #[error("unrecognized gender {0:?} (expected m, male, f, or female)")]
    UnknownGender(String),

    /// Category cell is not one of the fixed weight-class labels
    #[error("unknown weight class {0:?}")]
    UnknownWeightClass(String),

    /// A numeric cell did not parse as an integer
    #[error("{field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },

    /// Athlete is too young for any division (age 13 or under)
    #[error("no division for birth year {birth_year}: age {age} is under 14")]
    NoDivision { birth_year: i32, age: i32 },
}

/// All row-level normalization failures from one run, reported together
/// so the operator can fix the sheet in a single pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<RowError>,
}

impl ValidationReport {
    /// Create a report from the collected row errors
    pub fn new(errors: Vec<RowError>) -> Self {
        Self { errors }
    }

    /// The individual row errors
    pub fn errors(&self) -> &[RowError] {
        &self.errors
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.errors.len() == 1 { "row" } else { "rows" };
        write!(f, "{} {} failed validation:", self.errors.len(), noun)?;
        for err in &self.errors {
            write!(f, "\n  {}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// Errors from writing the output CSV
#[derive(Error, Debug)]
pub enum WriteError {
    /// Output directory could not be created
    #[error("cannot create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A CSV record could not be written
    #[error("cannot write {}: {source}", .path.display())]
    Csv { path: PathBuf, source: csv::Error },

    /// Buffered output could not be flushed to disk
    #[error("cannot flush {}: {source}", .path.display())]
    Flush {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
