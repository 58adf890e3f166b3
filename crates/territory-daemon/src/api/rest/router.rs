//! API Router configuration

use super::handlers;
use super::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Access checks and policy creation
        .route(
            "/distributor",
            get(handlers::check_access)
                .post(handlers::create_distributor)
                .fallback(handlers::method_not_allowed),
        )
        .route("/distributors", get(handlers::list_distributors))
        .route("/distributors/:name", get(handlers::get_distributor))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
