//! Person entity: a named owner of zero or more contacts.

use crate::model::Contact;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A person. Fields are fixed at construction; an update is a replacement
/// entity built with [`Person::with_id`].
#[derive(Debug, Clone)]
pub struct Person {
    id: Uuid,
    name: String,
    contacts: Vec<Contact>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Person {
    /// New person with a generated identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Person with an explicit identifier, for replace-style updates and
    /// rehydration from storage.
    pub fn with_id(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            contacts: Vec::new(),
            deleted_at: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Soft-delete timestamp. Present on every entity but not used by any
    /// operation; deletion is hard deletion.
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    pub(crate) fn attach_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }
}
