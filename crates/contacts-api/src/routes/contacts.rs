//! Contact routes.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use database::Contact;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};
use crate::service::ContactRequest;
use crate::state::AppState;

/// Query for the list endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub phone_number: Option<String>,
}

/// Query for the first-name search.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstNameQuery {
    pub first_name: Option<String>,
}

/// Contact count.
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: i64,
}

/// 200 with the list, or 204 when it is empty.
fn list_response(contacts: Vec<Contact>) -> Response {
    if contacts.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }
    Json(contacts).into_response()
}

fn contact_id(path: std::result::Result<Path<i64>, PathRejection>) -> Result<i64> {
    let Path(id) = path.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    Ok(id)
}

fn query_params<T>(query: std::result::Result<Query<T>, QueryRejection>) -> Result<T> {
    let Query(params) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    Ok(params)
}

fn contact_body(
    body: std::result::Result<Json<ContactRequest>, JsonRejection>,
) -> Result<ContactRequest> {
    let Json(request) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    Ok(request)
}

/// List contacts, optionally filtered by phone number fragment.
pub async fn list_contacts(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListQuery>, QueryRejection>,
) -> Result<Response> {
    let query = query_params(query)?;
    let contacts = state.contacts.list(query.phone_number.as_deref()).await?;
    Ok(list_response(contacts))
}

/// Get one contact by id.
pub async fn get_contact(
    State(state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<Contact>> {
    let contact = state.contacts.get(contact_id(path)?).await?;
    Ok(Json(contact))
}

/// Contacts with an exact first name.
pub async fn get_by_first_name(
    State(state): State<AppState>,
    query: std::result::Result<Query<FirstNameQuery>, QueryRejection>,
) -> Result<Response> {
    let query = query_params(query)?;
    let contacts = state
        .contacts
        .find_by_first_name(query.first_name.as_deref())
        .await?;
    Ok(list_response(contacts))
}

/// Contacts with the published flag set.
pub async fn published_contacts(State(state): State<AppState>) -> Result<Response> {
    let contacts = state.contacts.published().await?;
    Ok(list_response(contacts))
}

pub async fn count_contacts(State(state): State<AppState>) -> Result<Json<CountResponse>> {
    let count = state.contacts.count().await?;
    Ok(Json(CountResponse { count }))
}

pub async fn create_contact(
    State(state): State<AppState>,
    body: std::result::Result<Json<ContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>)> {
    let contact = state.contacts.create(contact_body(body)?).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

pub async fn update_contact(
    State(state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
    body: std::result::Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<Contact>> {
    let id = contact_id(path)?;
    let contact = state.contacts.update(id, contact_body(body)?).await?;
    Ok(Json(contact))
}

pub async fn delete_contact(
    State(state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<StatusCode> {
    state.contacts.delete(contact_id(path)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_all_contacts(State(state): State<AppState>) -> Result<StatusCode> {
    state.contacts.delete_all().await?;
    Ok(StatusCode::NO_CONTENT)
}
