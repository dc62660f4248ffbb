use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/catalog", get(handlers::get_catalog))
        .route("/api/log", get(handlers::get_log))
        .route("/api/form", post(handlers::form))
        .route("/api/select", post(handlers::select))
        .route("/api/confirm", post(handlers::confirm))
        .route("/api/remove", post(handlers::remove))
        .with_state(state)
}
