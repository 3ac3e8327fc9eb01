//! Request validation for the transfer shapes. Required/length rules run
//! before any persistence call and collect into a field → messages map.

use crate::error::{ApiError, FieldErrors};
use crate::viewmodel::{ContactViewModel, PersonViewModel};

/// Upper bound for user-supplied text columns (VARCHAR(200) in the schema).
pub const MAX_TEXT_LEN: usize = 200;

pub struct RequestValidator;

impl RequestValidator {
    /// Person input: `name` required, non-empty, at most 200 characters.
    pub fn validate_person(vm: &PersonViewModel) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        check_required_text("name", vm.name.as_deref(), &mut errors);
        finish(errors)
    }

    /// Contact input: `value` required, non-empty, at most 200 characters;
    /// `type` required.
    pub fn validate_contact(vm: &ContactViewModel) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        check_required_text("value", vm.value.as_deref(), &mut errors);
        if vm.contact_type.is_none() {
            push(&mut errors, "type", "type is required");
        }
        finish(errors)
    }
}

fn check_required_text(field: &str, value: Option<&str>, errors: &mut FieldErrors) {
    match value {
        // Whitespace-only input counts as missing.
        None => push(errors, field, &format!("{} is required", field)),
        Some(s) if s.trim().is_empty() => push(errors, field, &format!("{} is required", field)),
        Some(s) if s.chars().count() > MAX_TEXT_LEN => push(
            errors,
            field,
            &format!("{} must be at most {} characters", field, MAX_TEXT_LEN),
        ),
        Some(_) => {}
    }
}

fn push(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

fn finish(errors: FieldErrors) -> Result<(), ApiError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContactType;

    fn person_vm(name: Option<&str>) -> PersonViewModel {
        PersonViewModel {
            id: None,
            name: name.map(String::from),
            contacts: Vec::new(),
        }
    }

    fn contact_vm(value: Option<&str>, contact_type: Option<ContactType>) -> ContactViewModel {
        ContactViewModel {
            id: None,
            value: value.map(String::from),
            contact_type,
        }
    }

    fn field_errors(err: ApiError) -> FieldErrors {
        match err {
            ApiError::Validation(map) => map,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn valid_person_passes() {
        assert!(RequestValidator::validate_person(&person_vm(Some("Ada"))).is_ok());
    }

    #[test]
    fn missing_name_is_rejected() {
        let errors = field_errors(RequestValidator::validate_person(&person_vm(None)).unwrap_err());
        assert_eq!(errors["name"], vec!["name is required"]);
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let errors =
            field_errors(RequestValidator::validate_person(&person_vm(Some("   "))).unwrap_err());
        assert_eq!(errors["name"], vec!["name is required"]);
    }

    #[test]
    fn name_length_boundary() {
        let exactly = "a".repeat(MAX_TEXT_LEN);
        assert!(RequestValidator::validate_person(&person_vm(Some(&exactly))).is_ok());

        let too_long = "a".repeat(MAX_TEXT_LEN + 1);
        let errors =
            field_errors(RequestValidator::validate_person(&person_vm(Some(&too_long))).unwrap_err());
        assert_eq!(errors["name"], vec!["name must be at most 200 characters"]);
    }

    #[test]
    fn contact_requires_value_and_type() {
        let errors = field_errors(RequestValidator::validate_contact(&contact_vm(None, None)).unwrap_err());
        assert_eq!(errors["value"], vec!["value is required"]);
        assert_eq!(errors["type"], vec!["type is required"]);
    }

    #[test]
    fn valid_contact_passes() {
        let vm = contact_vm(Some("a@b.com"), Some(ContactType::Email));
        assert!(RequestValidator::validate_contact(&vm).is_ok());
    }
}
