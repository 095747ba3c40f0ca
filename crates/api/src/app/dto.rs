use serde::Deserialize;

use stockdesk_core::DomainResult;
use stockdesk_inventory::{Interaction, quantity_from_signed};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /inventory/items`.
///
/// A missing name reads as empty, so it is reported like a blank one.
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    #[serde(default)]
    pub name: String,
    pub quantity: Option<i64>,
}

impl AddItemRequest {
    pub fn into_interaction(self) -> DomainResult<Interaction> {
        let quantity = self.quantity.map(quantity_from_signed).transpose()?;
        Ok(Interaction::Add {
            name: self.name,
            quantity,
        })
    }
}
