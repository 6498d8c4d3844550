use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::logging_middleware;
use super::state::AppState;
use super::users;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // User forms
        .route("/", get(users::list_users))
        .route("/create", get(users::show_create_form))
        .route("/create", post(users::create_user))
        .route("/{id}/update", get(users::show_update_form))
        .route("/{id}/update", post(users::update_user))
        .route("/{id}/delete", post(users::delete_user))
        // Search
        .route("/search", get(users::search_users))
        // Add state and middleware
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
