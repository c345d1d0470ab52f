use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/ingest", post(handlers::ingest))
        .route("/api/skills/:category/:date", get(handlers::get_skills))
        .route("/api/listings/:from/:to", get(handlers::get_listings))
        .route("/api/window/:category", get(handlers::get_window))
        .with_state(state)
}
