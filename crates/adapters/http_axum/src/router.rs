//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use hapgate_app::ports::AccessoryClient;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the accessories API and a health check. Includes a [`TraceLayer`]
/// that logs each HTTP request/response at the `DEBUG` level using the
/// `tracing` ecosystem.
pub fn build<C>(state: AppState<C>) -> Router
where
    C: AccessoryClient + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
