//! Age-based division assignment

use std::fmt;

/// Competitive division, derived from age in the current calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Division {
    Youth,
    Junior,
    Senior,
    Master,
}

impl Division {
    /// Assign a division from an age in years.
    ///
    /// First match wins: over 34 is Master, over 20 Senior, over 17
    /// Junior, over 13 Youth. Ages of 13 and under have no division
    /// and yield `None`; the caller rejects such rows.
    pub fn for_age(age: i32) -> Option<Self> {
        if age > 34 {
            Some(Division::Master)
        } else if age > 20 {
            Some(Division::Senior)
        } else if age > 17 {
            Some(Division::Junior)
        } else if age > 13 {
            Some(Division::Youth)
        } else {
            None
        }
    }

    /// The label printed in the start list
    pub const fn label(&self) -> &'static str {
        match self {
            Division::Youth => "Youth",
            Division::Junior => "Junior",
            Division::Senior => "Senior",
            Division::Master => "Master",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
