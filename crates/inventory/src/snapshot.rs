//! In-memory inventory snapshot and the two mutations an evaluation may
//! perform on it.

use std::collections::BTreeMap;

use serde::Serialize;

use stockdesk_core::{DomainError, DomainResult, Entity};

use crate::item::{InventoryRecord, ItemName, Quantity, quantity_from_signed};

/// Quantity used by `add` when the caller does not supply one.
pub const DEFAULT_ADD_QUANTITY: Quantity = 10;

const DEFAULT_SEED: [(&str, Quantity); 5] = [
    ("Kawa", 50),
    ("Herbata", 120),
    ("Cukier", 15),
    ("Mleko", 38),
    ("Czekolada", 80),
];

/// Result of [`InventorySnapshot::upsert_add`] when the input was valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The name was new and has been inserted.
    Inserted,
    /// The name was already present; its quantity was left as is.
    AlreadyExists { existing: Quantity },
}

/// Complete inventory state of one evaluation, keyed by item name.
///
/// Iteration follows name order. Use [`records_by_quantity`] for
/// presentation order.
///
/// [`records_by_quantity`]: InventorySnapshot::records_by_quantity
/// Serializes as a JSON object. Untrusted input goes through
/// [`InventorySnapshot::from_signed_entries`], which rejects duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InventorySnapshot {
    items: BTreeMap<ItemName, Quantity>,
}

impl InventorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in starting state every evaluation resets to.
    pub fn seed() -> Self {
        DEFAULT_SEED
            .iter()
            .map(|(name, quantity)| {
                InventoryRecord::new(ItemName(name.to_string()), *quantity)
            })
            .collect()
    }

    /// Build a snapshot from untrusted `(name, quantity)` pairs, e.g. a seed
    /// file. Rejects blank names, negative quantities and duplicate names
    /// (after trimming).
    pub fn from_signed_entries<I, S>(entries: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut snapshot = Self::new();
        for (raw_name, raw_quantity) in entries {
            let name = ItemName::parse(raw_name.as_ref())?;
            let quantity = quantity_from_signed(raw_quantity)?;
            if snapshot.items.contains_key(&name) {
                return Err(DomainError::invalid_input(format!(
                    "duplicate item name: {name}"
                )));
            }
            snapshot.items.insert(name, quantity);
        }
        Ok(snapshot)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<Quantity> {
        self.items.get(name.trim()).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name.trim())
    }

    pub fn quantities(&self) -> impl Iterator<Item = Quantity> + '_ {
        self.items.values().copied()
    }

    /// Records in name order.
    pub fn records(&self) -> impl Iterator<Item = InventoryRecord> + '_ {
        self.items
            .iter()
            .map(|(name, quantity)| InventoryRecord::new(name.clone(), *quantity))
    }

    /// Records sorted by quantity ascending, ties broken by name.
    pub fn records_by_quantity(&self) -> Vec<InventoryRecord> {
        let mut records: Vec<InventoryRecord> = self.records().collect();
        // Name order is already established; a stable sort keeps it for ties.
        records.sort_by_key(|r| r.quantity);
        records
    }

    /// Insert `name` with `quantity` unless it is already present.
    ///
    /// `quantity` must be positive. On any error the snapshot is untouched.
    pub fn upsert_add(&mut self, name: &str, quantity: Quantity) -> DomainResult<AddOutcome> {
        let name = ItemName::parse(name)?;
        if quantity == 0 {
            return Err(DomainError::invalid_input("quantity must be positive"));
        }

        if let Some(existing) = self.items.get(&name) {
            return Ok(AddOutcome::AlreadyExists {
                existing: *existing,
            });
        }

        self.items.insert(name, quantity);
        Ok(AddOutcome::Inserted)
    }

    /// Delete `name` and return the removed record.
    pub fn remove(&mut self, name: &str) -> DomainResult<InventoryRecord> {
        let key = name.trim();
        match self.items.remove_entry(key) {
            Some((name, quantity)) => Ok(InventoryRecord::new(name, quantity)),
            None => Err(DomainError::not_found(key)),
        }
    }
}

impl FromIterator<InventoryRecord> for InventorySnapshot {
    /// Later records replace earlier ones with the same name.
    fn from_iter<T: IntoIterator<Item = InventoryRecord>>(iter: T) -> Self {
        let mut items = BTreeMap::new();
        for record in iter {
            items.insert(record.id().clone(), record.quantity);
        }
        Self { items }
    }
}
