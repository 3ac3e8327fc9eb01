//! Person routes.

use crate::handlers::people::{
    create_person, delete_person, get_person, list_people, update_person,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn people_routes(state: AppState) -> Router {
    Router::new()
        .route("/people", get(list_people))
        .route("/person", post(create_person))
        .route(
            "/person/:id",
            get(get_person).put(update_person).delete(delete_person),
        )
        .with_state(state)
}
