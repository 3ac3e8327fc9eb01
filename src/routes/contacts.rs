//! Contact routes. The create route hangs off the owning person's path.

use crate::handlers::contacts::{create_contact, delete_contact, get_contact, update_contact};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn contact_routes(state: AppState) -> Router {
    Router::new()
        .route("/person/:id/contact", post(create_contact))
        .route(
            "/contact/:id",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
        .with_state(state)
}
