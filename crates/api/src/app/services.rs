use std::sync::Arc;

use stockdesk_inventory::{AddOutcome, Applied, Evaluation, Interaction, InventorySnapshot, evaluate};

use crate::context::EvaluationContext;

/// Request-independent services: only the seed snapshot.
#[derive(Debug, Clone)]
pub struct AppServices {
    seed: Arc<InventorySnapshot>,
}

impl AppServices {
    pub fn new(seed: InventorySnapshot) -> Self {
        Self {
            seed: Arc::new(seed),
        }
    }

    /// Run one evaluation from a fresh copy of the seed and log its outcome.
    pub fn evaluate(&self, ctx: &EvaluationContext, interaction: &Interaction) -> Evaluation {
        let evaluation = evaluate(
            &self.seed,
            interaction,
            ctx.evaluation_id(),
            ctx.evaluated_at(),
        );

        match &evaluation.result {
            Ok(Applied::Viewed) => {
                tracing::debug!(items = evaluation.view.summary.unique_products, "inventory viewed");
            }
            Ok(Applied::Added {
                name,
                quantity,
                outcome: AddOutcome::Inserted,
            }) => tracing::info!(item = %name, quantity, "item added"),
            Ok(Applied::Added {
                name,
                outcome: AddOutcome::AlreadyExists { existing },
                ..
            }) => tracing::info!(item = %name, existing, "item already exists"),
            Ok(Applied::Removed(record)) => {
                tracing::info!(item = %record.name, quantity = record.quantity, "item removed")
            }
            Err(e) => tracing::warn!(code = e.code(), "interaction rejected: {e}"),
        }

        evaluation
    }
}
