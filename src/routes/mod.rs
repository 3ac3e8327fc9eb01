//! HTTP routing: the CRUD surface plus common service routes, assembled with
//! CORS, tracing, and body-limit middleware.

mod common;
mod contacts;
mod people;

pub use common::common_routes;
pub use contacts::contact_routes;
pub use people::people_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

const MAX_BODY_BYTES: usize = 256 * 1024;

/// Full application router. `main` and the tests both serve this.
pub fn app(state: AppState) -> Router {
    // Cross-origin access is open: any origin, any method, any header.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(common_routes(state.clone()))
        .merge(people_routes(state.clone()))
        .merge(contact_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
}
