//! Person handlers: parse and validate input, call the persistence gateway
//! once, shape the response.

use crate::error::ApiError;
use crate::model::Person;
use crate::service::{PeopleService, RequestValidator};
use crate::state::AppState;
use crate::viewmodel::PersonViewModel;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

pub async fn list_people(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let people = PeopleService::list(&state.pool).await?;
    let body: Vec<PersonViewModel> = people.iter().map(PersonViewModel::from_entity).collect();
    Ok(Json(body))
}

pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let person = PeopleService::get(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(PersonViewModel::from_entity(&person)))
}

pub async fn create_person(
    State(state): State<AppState>,
    Json(body): Json<PersonViewModel>,
) -> Result<impl IntoResponse, ApiError> {
    RequestValidator::validate_person(&body)?;
    let person = Person::new(body.name.unwrap_or_default());
    let affected = PeopleService::create(&state.pool, &person).await?;
    if affected == 0 {
        return Err(ApiError::BadRequest(
            "the person could not be created".into(),
        ));
    }
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/person/{}", person.id()))],
        Json(PersonViewModel::from_entity(&person)),
    ))
}

pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PersonViewModel>,
) -> Result<StatusCode, ApiError> {
    RequestValidator::validate_person(&body)?;
    let replacement = Person::with_id(id, body.name.unwrap_or_default());
    let affected = PeopleService::update(&state.pool, &replacement).await?;
    if affected == 0 {
        return Err(ApiError::BadRequest(
            "the person could not be updated".into(),
        ));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let affected = PeopleService::delete(&state.pool, id).await?;
    if affected == 0 {
        return Err(ApiError::BadRequest(
            "the person could not be deleted".into(),
        ));
    }
    Ok(StatusCode::NO_CONTENT)
}
