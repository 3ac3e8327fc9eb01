//! Transfer shapes: the wire representation, decoupled from the entities.
//! One shape per entity is used for both request parsing and response
//! serialization; fields are optional on input and always set on output.

use crate::model::{Contact, ContactType, Person};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonViewModel {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub contacts: Vec<ContactViewModel>,
}

impl PersonViewModel {
    pub fn from_entity(person: &Person) -> Self {
        Self {
            id: Some(person.id()),
            name: Some(person.name().to_string()),
            contacts: person
                .contacts()
                .iter()
                .map(ContactViewModel::from_entity)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactViewModel {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(rename = "type", default)]
    pub contact_type: Option<ContactType>,
}

impl ContactViewModel {
    pub fn from_entity(contact: &Contact) -> Self {
        Self {
            id: Some(contact.id()),
            value: Some(contact.value().to_string()),
            contact_type: Some(contact.contact_type()),
        }
    }
}
