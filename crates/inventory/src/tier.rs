//! Stock status tiers.
//!
//! Three fixed, ordered bands over `[0, ∞)`:
//! `0..=20` critical, `21..=40` caution, `41..` sufficient.

use serde::{Deserialize, Serialize};

use stockdesk_core::ValueObject;

use crate::item::Quantity;

/// Highest quantity still classified as [`StatusTier::Critical`].
pub const CRITICAL_MAX: Quantity = 20;

/// Highest quantity still classified as [`StatusTier::Caution`].
pub const CAUTION_MAX: Quantity = 40;

/// Derived stock status. Never stored; recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    Critical,
    Caution,
    Sufficient,
}

impl StatusTier {
    /// All tiers, most urgent first.
    pub const ALL: [StatusTier; 3] = [
        StatusTier::Critical,
        StatusTier::Caution,
        StatusTier::Sufficient,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StatusTier::Critical => "critical",
            StatusTier::Caution => "caution",
            StatusTier::Sufficient => "sufficient",
        }
    }

    /// Human-readable advice shown next to the tier heading.
    pub fn label(self) -> &'static str {
        match self {
            StatusTier::Critical => "order immediately",
            StatusTier::Caution => "running low",
            StatusTier::Sufficient => "adequate stock",
        }
    }
}

impl ValueObject for StatusTier {}

impl core::fmt::Display for StatusTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a quantity into its tier.
pub fn classify(quantity: Quantity) -> StatusTier {
    if quantity <= CRITICAL_MAX {
        StatusTier::Critical
    } else if quantity <= CAUTION_MAX {
        StatusTier::Caution
    } else {
        StatusTier::Sufficient
    }
}
