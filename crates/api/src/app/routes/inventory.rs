use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{delete, get, post},
};

use stockdesk_inventory::{AddOutcome, Applied, Interaction, render_text};

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::EvaluationContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(get_inventory))
        .route("/report", get(get_report))
        .route("/items", post(add_item))
        .route("/items/:name", delete(remove_item))
}

pub async fn get_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<EvaluationContext>,
) -> axum::response::Response {
    let evaluation = services.evaluate(&ctx, &Interaction::View);
    (StatusCode::OK, Json(evaluation.view)).into_response()
}

pub async fn get_report(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<EvaluationContext>,
) -> axum::response::Response {
    let evaluation = services.evaluate(&ctx, &Interaction::View);
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_text(&evaluation.view),
    )
        .into_response()
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<EvaluationContext>,
    body: Result<Json<dto::AddItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::warn!("add body rejected: {}", rejection.body_text());
            return errors::json_rejection_to_response(&rejection);
        }
    };

    let interaction = match body.into_interaction() {
        Ok(i) => i,
        Err(e) => {
            tracing::warn!(code = e.code(), "interaction rejected: {e}");
            return errors::domain_error_to_response(&e);
        }
    };

    let evaluation = services.evaluate(&ctx, &interaction);
    let status = match &evaluation.result {
        Ok(Applied::Added {
            outcome: AddOutcome::Inserted,
            ..
        }) => StatusCode::CREATED,
        Ok(_) => StatusCode::OK,
        Err(e) => return errors::domain_error_to_response(e),
    };

    (status, Json(evaluation.view)).into_response()
}

pub async fn remove_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<EvaluationContext>,
    Path(name): Path<String>,
) -> axum::response::Response {
    let evaluation = services.evaluate(&ctx, &Interaction::Remove { name });
    match &evaluation.result {
        Ok(_) => (StatusCode::OK, Json(evaluation.view)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
