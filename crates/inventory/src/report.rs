//! Derived views over a snapshot: tier groups and the summary line.

use serde::{Deserialize, Serialize};

use stockdesk_core::ValueObject;

use crate::item::InventoryRecord;
use crate::snapshot::InventorySnapshot;
use crate::tier::StatusTier;

/// Records grouped by tier. All three groups are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierGroups {
    pub critical: Vec<InventoryRecord>,
    pub caution: Vec<InventoryRecord>,
    pub sufficient: Vec<InventoryRecord>,
}

impl TierGroups {
    pub fn get(&self, tier: StatusTier) -> &[InventoryRecord] {
        match tier {
            StatusTier::Critical => &self.critical,
            StatusTier::Caution => &self.caution,
            StatusTier::Sufficient => &self.sufficient,
        }
    }

    fn get_mut(&mut self, tier: StatusTier) -> &mut Vec<InventoryRecord> {
        match tier {
            StatusTier::Critical => &mut self.critical,
            StatusTier::Caution => &mut self.caution,
            StatusTier::Sufficient => &mut self.sufficient,
        }
    }

    /// Every tier with its records, most urgent first.
    pub fn iter(&self) -> impl Iterator<Item = (StatusTier, &[InventoryRecord])> {
        StatusTier::ALL.into_iter().map(move |tier| (tier, self.get(tier)))
    }

    /// Total number of records across all tiers.
    pub fn len(&self) -> usize {
        self.critical.len() + self.caution.len() + self.sufficient.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Aggregate figures for a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of all quantities (saturates at `u64::MAX`).
    pub total_units: u64,
    pub unique_products: usize,
}

impl ValueObject for Summary {}

/// Group every record of `snapshot` under its tier, in presentation order.
pub fn partition(snapshot: &InventorySnapshot) -> TierGroups {
    let mut groups = TierGroups::default();
    for record in snapshot.records_by_quantity() {
        groups.get_mut(record.tier()).push(record);
    }
    groups
}

pub fn summarize(snapshot: &InventorySnapshot) -> Summary {
    Summary {
        total_units: snapshot
            .quantities()
            .fold(0u64, |acc, q| acc.saturating_add(q)),
        unique_products: snapshot.len(),
    }
}
