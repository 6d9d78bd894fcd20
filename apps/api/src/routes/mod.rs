pub mod evaluate;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/evaluate", post(evaluate::handle_evaluate))
        .with_state(state)
}
