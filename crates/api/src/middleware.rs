use std::time::Instant;

use axum::{middleware::Next, response::Response};
use chrono::Utc;
use tracing::Instrument;

use stockdesk_core::EvaluationId;

use crate::context::EvaluationContext;

/// Response header carrying the evaluation id.
pub const EVALUATION_ID_HEADER: &str = "x-evaluation-id";

/// Open an `evaluation` span for the request and attach its context.
pub async fn evaluation_middleware(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let ctx = EvaluationContext::new(EvaluationId::new(), Utc::now());
    req.extensions_mut().insert(ctx);

    let span = tracing::info_span!(
        "evaluation",
        evaluation_id = %ctx.evaluation_id(),
        method = %req.method(),
        path = %req.uri().path(),
    );

    async move {
        let started = Instant::now();
        let mut res = next.run(req).await;

        if let Ok(value) = ctx.evaluation_id().to_string().parse() {
            res.headers_mut().insert(EVALUATION_ID_HEADER, value);
        }

        tracing::info!(
            status = res.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );
        res
    }
    .instrument(span)
    .await
}
