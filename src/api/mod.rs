//! API module
//!
//! HTTP endpoints, middleware and router assembly.

pub mod middleware;
pub mod routes;
mod state;


use axum::Router;
use tower_http::trace::TraceLayer;

pub use routes::{create_router, HealthCheck};
pub use state::AppState;

/// Build the complete application router
///
/// The health check is public; every `/expenses` route sits behind the
/// auth gate. Request logging wraps everything.
pub fn build_router(state: AppState) -> Router {
    let expense_routes = create_router().route_layer(axum::middleware::from_fn_with_state(
        state.clone(),
        middleware::auth_middleware,
    ));

    Router::new()
        .route("/health-check", axum::routing::get(routes::health_check))
        .merge(expense_routes)
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
