//! Gender classification
//!
//! The registration sheet is free-form here; only the four spellings
//! below are accepted.

use std::fmt;

/// Athlete gender, normalized from the registration cell.
///
/// The ordering (Female before Male) is load-bearing: it is the
/// bucket order of the gender sort pass, which puts the female
/// session first in the start list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Parse a registration cell, case-insensitively.
    ///
    /// Accepts `f`/`female`/`m`/`male`; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "f" | "female" => Some(Gender::Female),
            "m" | "male" => Some(Gender::Male),
            _ => None,
        }
    }

    /// Canonical label
    pub const fn label(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
