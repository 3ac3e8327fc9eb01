//! People & contacts REST API backed by PostgreSQL.

pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod viewmodel;

pub use error::{ApiError, FieldErrors};
pub use migration::apply_migrations;
pub use model::{Contact, ContactType, Person};
pub use routes::app;
pub use state::AppState;
pub use store::{create_pool, ensure_database_exists};
pub use viewmodel::{ContactViewModel, PersonViewModel};
