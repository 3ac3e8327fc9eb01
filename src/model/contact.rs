//! Contact entity: one way of reaching a person.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of contact method. Stored as the `contact_type` PostgreSQL enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "contact_type", rename_all = "lowercase")]
pub enum ContactType {
    Phone,
    Email,
}

/// A contact method, optionally owned by a person. Like [`Person`], fields
/// are fixed at construction and an update means building a replacement.
///
/// [`Person`]: crate::model::Person
#[derive(Debug, Clone)]
pub struct Contact {
    id: Uuid,
    contact_type: ContactType,
    value: String,
    person_id: Option<Uuid>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Contact {
    /// New unowned contact with a generated identifier.
    pub fn new(contact_type: ContactType, value: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            contact_type,
            value: value.into(),
            person_id: None,
            deleted_at: None,
        }
    }

    /// New contact owned by the given person.
    pub fn owned_by(contact_type: ContactType, value: impl Into<String>, person_id: Uuid) -> Self {
        Self {
            person_id: Some(person_id),
            ..Self::new(contact_type, value)
        }
    }

    /// Contact with an explicit identifier, for replace-style updates. The
    /// owner link is not part of a replacement and stays empty here.
    pub fn with_id(id: Uuid, contact_type: ContactType, value: impl Into<String>) -> Self {
        Self {
            id,
            ..Self::new(contact_type, value)
        }
    }

    pub(crate) fn from_store(
        id: Uuid,
        contact_type: ContactType,
        value: String,
        person_id: Option<Uuid>,
    ) -> Self {
        Self {
            id,
            contact_type,
            value,
            person_id,
            deleted_at: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn contact_type(&self) -> ContactType {
        self.contact_type
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn person_id(&self) -> Option<Uuid> {
        self.person_id
    }

    /// See [`Person::deleted_at`](crate::model::Person::deleted_at).
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_by_links_the_person() {
        let person_id = Uuid::new_v4();
        let c = Contact::owned_by(ContactType::Phone, "555-0100", person_id);
        assert_eq!(c.person_id(), Some(person_id));
        assert_eq!(c.contact_type(), ContactType::Phone);
    }

    #[test]
    fn with_id_has_no_owner() {
        let id = Uuid::new_v4();
        let c = Contact::with_id(id, ContactType::Email, "a@b.com");
        assert_eq!(c.id(), id);
        assert_eq!(c.person_id(), None);
    }

    #[test]
    fn contact_type_json_uses_variant_names() {
        assert_eq!(
            serde_json::to_string(&ContactType::Email).unwrap(),
            "\"Email\""
        );
        let parsed: ContactType = serde_json::from_str("\"Phone\"").unwrap();
        assert_eq!(parsed, ContactType::Phone);
    }
}
