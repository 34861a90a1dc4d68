//! Weight class (bodyweight category) lookup
//!
//! Provides a validated index into the fixed label list, so an
//! out-of-range class is unrepresentable after normalization.

use std::fmt;

/// A bodyweight class, stored as its index into [`WeightClass::LABELS`].
///
/// Construction goes through [`WeightClass::parse`], so the index is
/// always in range and label recovery cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightClass(usize);

impl WeightClass {
    /// The fixed class labels, in session order.
    ///
    /// The order is NOT numerically monotonic: "94" comes before "90"
    /// and "90+". The category-grouped sort relies on these positions,
    /// so the list must never be reordered.
    pub const LABELS: [&'static str; 15] = [
        "48", "53", "56", "58", "62", "63", "69", "75", "77", "85", "94", "90", "90+", "105",
        "105+",
    ];

    /// Look up a registration label.
    ///
    /// Returns `None` for labels not in [`Self::LABELS`].
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::LABELS.iter().position(|l| *l == label).map(Self)
    }

    /// Zero-based position in [`Self::LABELS`]
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// The human-readable class label
    #[inline]
    pub const fn label(&self) -> &'static str {
        Self::LABELS[self.0]
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
