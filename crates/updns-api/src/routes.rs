use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Build the service router
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::get_index))
        .route("/update/{hostname}/{token}", post(handlers::post_update))
        .route(
            "/update/{hostname}/{token}/{ip}",
            post(handlers::post_update_for_ip),
        )
        .with_state(state)
}
