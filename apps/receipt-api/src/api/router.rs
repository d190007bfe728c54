//! Router setup and configuration

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::error::panic_response;
use crate::AppState;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    let routes = Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/{id}/points", get(handlers::get_points))
        .route("/health", get(handlers::health_check))
        .with_state(state);

    with_middleware(routes)
}

/// Wraps routes in the server's middleware stack.
///
/// A panicking handler answers 500 with the generic error body instead of
/// dropping the connection.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}
