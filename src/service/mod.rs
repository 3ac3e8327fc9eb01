//! Persistence gateway and request validation.

mod contacts;
mod people;
mod validation;

pub use contacts::ContactService;
pub use people::PeopleService;
pub use validation::{RequestValidator, MAX_TEXT_LEN};
