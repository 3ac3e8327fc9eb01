//! Contact handlers.

use crate::error::ApiError;
use crate::model::Contact;
use crate::service::{ContactService, RequestValidator};
use crate::state::AppState;
use crate::viewmodel::ContactViewModel;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let contact = ContactService::get(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(ContactViewModel::from_entity(&contact)))
}

pub async fn create_contact(
    State(state): State<AppState>,
    Path(person_id): Path<Uuid>,
    Json(body): Json<ContactViewModel>,
) -> Result<impl IntoResponse, ApiError> {
    RequestValidator::validate_contact(&body)?;
    let ContactViewModel {
        contact_type: Some(contact_type),
        value: Some(value),
        ..
    } = body
    else {
        return Err(ApiError::BadRequest("malformed contact".into()));
    };
    let contact = Contact::owned_by(contact_type, value, person_id);
    let affected = ContactService::create(&state.pool, person_id, &contact).await?;
    if affected == 0 {
        return Err(ApiError::BadRequest(
            "the contact could not be created".into(),
        ));
    }
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/contact/{}", contact.id()))],
        Json(ContactViewModel::from_entity(&contact)),
    ))
}

pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ContactViewModel>,
) -> Result<StatusCode, ApiError> {
    RequestValidator::validate_contact(&body)?;
    let ContactViewModel {
        contact_type: Some(contact_type),
        value: Some(value),
        ..
    } = body
    else {
        return Err(ApiError::BadRequest("malformed contact".into()));
    };
    let replacement = Contact::with_id(id, contact_type, value);
    let affected = ContactService::update(&state.pool, &replacement).await?;
    if affected == 0 {
        return Err(ApiError::BadRequest(
            "the contact could not be updated".into(),
        ));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Returns the affected-row count as the 200 body.
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let affected = ContactService::delete(&state.pool, id).await?;
    if affected == 0 {
        return Err(ApiError::BadRequest(
            "the contact could not be deleted".into(),
        ));
    }
    Ok((StatusCode::OK, Json(affected)))
}
