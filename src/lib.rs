//! genstartlist - competition start-list generator library
//!
//! This library turns a weightlifting meet registration spreadsheet
//! into an ordered, gender-sessioned start list.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`domain`]: Domain models with validation
//! - [`error`]: Error types
//! - [`sheet`]: Registration spreadsheet reader
//! - [`startlist`]: Session sorting, grouping, and rendering
//! - [`writer`]: CSV output

pub mod cli;
pub mod commands;
pub mod domain;
pub mod error;
pub mod sheet;
pub mod startlist;
pub mod writer;

pub use error::{AppError, Result};
