//! Domain entities, independent of transport and storage concerns.

pub mod contact;
pub mod person;

pub use contact::{Contact, ContactType};
pub use person::Person;
