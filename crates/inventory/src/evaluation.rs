//! One evaluation: seed → at most one mutation → view.
//!
//! Nothing survives an evaluation. Every call starts from a fresh copy of the
//! seed, so an interaction never observes the mutation of a previous one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockdesk_core::{DomainError, DomainResult, EvaluationId};

use crate::item::{InventoryRecord, ItemName, Quantity};
use crate::report::{Summary, TierGroups, partition, summarize};
use crate::snapshot::{AddOutcome, DEFAULT_ADD_QUANTITY, InventorySnapshot};
use crate::tier::StatusTier;

/// The user interaction that triggered an evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// Plain page load: no mutation.
    View,
    /// Add form submitted. `quantity` defaults to [`DEFAULT_ADD_QUANTITY`].
    Add {
        name: String,
        quantity: Option<Quantity>,
    },
    /// Remove button pressed for the selected item.
    Remove { name: String },
}

/// What an accepted interaction did to the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    Viewed,
    Added {
        name: ItemName,
        quantity: Quantity,
        outcome: AddOutcome,
    },
    Removed(InventoryRecord),
}

/// Apply one interaction to `snapshot`. On error the snapshot is unchanged.
pub fn apply(snapshot: &mut InventorySnapshot, interaction: &Interaction) -> DomainResult<Applied> {
    match interaction {
        Interaction::View => Ok(Applied::Viewed),
        Interaction::Add { name, quantity } => {
            let quantity = quantity.unwrap_or(DEFAULT_ADD_QUANTITY);
            let outcome = snapshot.upsert_add(name, quantity)?;
            Ok(Applied::Added {
                name: ItemName::parse(name)?,
                quantity,
                outcome,
            })
        }
        Interaction::Remove { name } => snapshot.remove(name).map(Applied::Removed),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
    Info,
}

/// Banner shown above the inventory after an interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn for_result(result: &DomainResult<Applied>, snapshot: &InventorySnapshot) -> Self {
        match result {
            Ok(Applied::Viewed) if snapshot.is_empty() => {
                Self::new(NoticeKind::Info, "inventory is empty")
            }
            Ok(Applied::Viewed) => Self::new(
                NoticeKind::Info,
                "the inventory resets to its starting state after every interaction",
            ),
            Ok(Applied::Added {
                name,
                quantity,
                outcome: AddOutcome::Inserted,
            }) => Self::new(
                NoticeKind::Success,
                format!("added {name} ({quantity} units) to the temporary inventory"),
            ),
            Ok(Applied::Added {
                name,
                outcome: AddOutcome::AlreadyExists { existing },
                ..
            }) => Self::new(
                NoticeKind::Warning,
                format!("{name} already exists with {existing} units; quantity unchanged"),
            ),
            Ok(Applied::Removed(record)) => Self::new(
                NoticeKind::Warning,
                format!("removed {} from the temporary inventory", record.name),
            ),
            Err(err) => Self::new(NoticeKind::Error, err.to_string()),
        }
    }
}

/// One table row: a record with its derived tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRow {
    pub name: ItemName,
    pub quantity: Quantity,
    pub tier: StatusTier,
}

impl From<InventoryRecord> for RecordRow {
    fn from(record: InventoryRecord) -> Self {
        let tier = record.tier();
        Self {
            name: record.name,
            quantity: record.quantity,
            tier,
        }
    }
}

/// Everything the page shows after one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub evaluation_id: EvaluationId,
    pub evaluated_at: DateTime<Utc>,
    pub notice: Notice,
    pub records: Vec<RecordRow>,
    pub tiers: TierGroups,
    pub summary: Summary,
}

impl View {
    pub fn from_snapshot(
        snapshot: &InventorySnapshot,
        notice: Notice,
        evaluation_id: EvaluationId,
        evaluated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            evaluation_id,
            evaluated_at,
            notice,
            records: snapshot
                .records_by_quantity()
                .into_iter()
                .map(RecordRow::from)
                .collect(),
            tiers: partition(snapshot),
            summary: summarize(snapshot),
        }
    }
}

/// Result of one evaluation: the rendered view plus the raw outcome, for
/// callers that need to branch on it (e.g. to pick an HTTP status).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub view: View,
    pub result: Result<Applied, DomainError>,
}

/// Run one evaluation from `seed`. Never fails: domain errors are reported
/// in the view's notice and the view reflects the unmodified seed.
pub fn evaluate(
    seed: &InventorySnapshot,
    interaction: &Interaction,
    evaluation_id: EvaluationId,
    evaluated_at: DateTime<Utc>,
) -> Evaluation {
    let mut snapshot = seed.clone();
    let result = apply(&mut snapshot, interaction);
    let notice = Notice::for_result(&result, &snapshot);
    let view = View::from_snapshot(&snapshot, notice, evaluation_id, evaluated_at);
    Evaluation { view, result }
}
