use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use super::middleware::{logging_middleware, metrics_middleware};
use super::state::AppState;
use super::{circles, health, users};

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{user_id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/{user_id}/upgrade", post(users::upgrade_user))
        .route("/users/{user_id}/downgrade", post(users::downgrade_user))
        // Circles
        .route(
            "/circles",
            get(circles::list_circles).post(circles::create_circle),
        )
        .route("/circles/recommend", get(circles::recommend_circles))
        .route("/circles/{circle_id}", get(circles::get_circle))
        .route("/circles/{circle_id}/join", post(circles::join_circle))
        .with_state(state)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
