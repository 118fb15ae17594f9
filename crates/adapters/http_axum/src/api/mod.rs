//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod accessories;

use axum::Router;
use axum::routing::get;

use hapgate_app::ports::AccessoryClient;

use crate::state::AppState;

/// Build the accessories sub-router.
pub fn routes<C>() -> Router<AppState<C>>
where
    C: AccessoryClient + 'static,
{
    Router::new()
        .route("/accessories", get(accessories::list::<C>))
        .route("/accessories/layout", get(accessories::layout::<C>))
        .route(
            "/accessories/{unique_id}",
            get(accessories::get::<C>).put(accessories::update::<C>),
        )
}
