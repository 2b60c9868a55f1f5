//! Axum router wiring for the scrape endpoint and ops routes.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .with_state(state)
}
