use chrono::{DateTime, Utc};

use stockdesk_core::EvaluationId;

/// Evaluation context for a request.
///
/// Attached by [`crate::middleware::evaluation_middleware`]; one per request,
/// never shared between requests.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EvaluationContext {
    evaluation_id: EvaluationId,
    evaluated_at: DateTime<Utc>,
}

impl EvaluationContext {
    pub fn new(evaluation_id: EvaluationId, evaluated_at: DateTime<Utc>) -> Self {
        Self {
            evaluation_id,
            evaluated_at,
        }
    }

    pub fn evaluation_id(&self) -> EvaluationId {
        self.evaluation_id
    }

    pub fn evaluated_at(&self) -> DateTime<Utc> {
        self.evaluated_at
    }
}
