//! HTTP application wiring (Axum router + services).
//!
//! - `services.rs`: the immutable seed and the evaluation entrypoint
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and their mapping to interactions
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use stockdesk_inventory::InventorySnapshot;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// `seed` is the starting state every request evaluates from. It is shared
/// read-only; no request can change what the next one sees.
pub fn build_app(seed: InventorySnapshot) -> Router {
    let services = Arc::new(services::AppServices::new(seed));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router().layer(Extension(services)))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::evaluation_middleware)),
        )
}
