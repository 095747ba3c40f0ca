use core::borrow::Borrow;

use serde::{Deserialize, Serialize};

use stockdesk_core::{DomainError, DomainResult, Entity, ValueObject};

use crate::tier::{StatusTier, classify};

/// Units on hand. Unsigned: a negative stock level cannot be represented.
pub type Quantity = u64;

/// Item name: trimmed, never empty. Acts as the key of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(pub(crate) String);

impl ItemName {
    /// Trim surrounding whitespace and reject what is left if empty.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_input("name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ItemName {}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

impl Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Convert a quantity read at a boundary (JSON body, seed file) into a
/// domain quantity.
pub fn quantity_from_signed(value: i64) -> DomainResult<Quantity> {
    Quantity::try_from(value)
        .map_err(|_| DomainError::invalid_input(format!("quantity cannot be negative (got {value})")))
}

/// One stock line: a name and the units on hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub name: ItemName,
    pub quantity: Quantity,
}

impl InventoryRecord {
    pub fn new(name: ItemName, quantity: Quantity) -> Self {
        Self { name, quantity }
    }

    pub fn tier(&self) -> StatusTier {
        classify(self.quantity)
    }
}

impl Entity for InventoryRecord {
    type Id = ItemName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}
