//! Domain models for genstartlist
//!
//! This module contains all domain types with validation.
//! Types are validated on construction (fail-fast pattern).

pub mod athlete;
pub mod division;
pub mod gender;
pub mod weight_class;

pub use athlete::{normalize_rows, Athlete};
pub use division::Division;
pub use gender::Gender;
pub use weight_class::WeightClass;
