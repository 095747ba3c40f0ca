//! Inventory domain module.
//!
//! Stock classification, tier grouping, summary figures and the
//! per-interaction evaluation, implemented as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod evaluation;
pub mod item;
pub mod render;
pub mod report;
pub mod snapshot;
pub mod tier;

pub use evaluation::{
    Applied, Evaluation, Interaction, Notice, NoticeKind, RecordRow, View, apply, evaluate,
};
pub use item::{InventoryRecord, ItemName, Quantity, quantity_from_signed};
pub use render::render_text;
pub use report::{Summary, TierGroups, partition, summarize};
pub use snapshot::{AddOutcome, DEFAULT_ADD_QUANTITY, InventorySnapshot};
pub use tier::{CAUTION_MAX, CRITICAL_MAX, StatusTier, classify};
