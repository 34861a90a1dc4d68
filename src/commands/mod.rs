//! Command handlers
//!
//! The generate handler orchestrates the whole pipeline:
//! read, normalize, sort, render, write.

pub mod generate;

pub use generate::run_generate;
