//! Phone management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Allocation, CreatePhone, Phone, UpdatePhone},
    views::PhoneWithAllocation,
};

use super::AuthenticatedUser;

/// List all phones
#[utoipa::path(
    get,
    path = "/phones",
    tag = "phones",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All phones", body = Vec<Phone>)
    )
)]
pub async fn list_phones(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Phone>>> {
    let phones = state.services.phones.list().await?;
    Ok(Json(phones))
}

/// List all phones annotated with their current allocation
#[utoipa::path(
    get,
    path = "/phones/details",
    tag = "phones",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Phones with allocation details", body = Vec<PhoneWithAllocation>)
    )
)]
pub async fn list_phone_details(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<PhoneWithAllocation>>> {
    let phones = state.services.views.phones_with_allocations().await?;
    Ok(Json(phones))
}

/// Get a phone by ID
#[utoipa::path(
    get,
    path = "/phones/{id}",
    tag = "phones",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Phone ID")
    ),
    responses(
        (status = 200, description = "The phone", body = Phone),
        (status = 404, description = "Phone not found")
    )
)]
pub async fn get_phone(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Phone>> {
    let phone = state.services.phones.get_by_id(id).await?;
    Ok(Json(phone))
}

/// Get the current allocation of a phone (null when unallocated)
#[utoipa::path(
    get,
    path = "/phones/{id}/allocation",
    tag = "phones",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Phone ID")
    ),
    responses(
        (status = 200, description = "The phone's allocation, or null", body = Option<Allocation>),
        (status = 404, description = "Phone not found")
    )
)]
pub async fn get_phone_allocation(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Option<Allocation>>> {
    let allocation = state.services.allocations.for_phone(id).await?;
    Ok(Json(allocation))
}

/// Add a phone
#[utoipa::path(
    post,
    path = "/phones",
    tag = "phones",
    security(("bearer_auth" = [])),
    request_body = CreatePhone,
    responses(
        (status = 201, description = "Phone created", body = Phone),
        (status = 400, description = "Invalid request"),
        (status = 422, description = "Requested status is Allocated")
    )
)]
pub async fn create_phone(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(request): Json<CreatePhone>,
) -> AppResult<(StatusCode, Json<Phone>)> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let phone = state.services.phones.create(request).await?;
    Ok((StatusCode::CREATED, Json(phone)))
}

/// Update a phone (replaces all mutable fields)
#[utoipa::path(
    put,
    path = "/phones/{id}",
    tag = "phones",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Phone ID")
    ),
    request_body = UpdatePhone,
    responses(
        (status = 200, description = "Phone updated", body = Phone),
        (status = 404, description = "Phone not found"),
        (status = 422, description = "Status edit disagrees with allocations")
    )
)]
pub async fn update_phone(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePhone>,
) -> AppResult<Json<Phone>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let phone = state.services.phones.update(id, request).await?;
    Ok(Json(phone))
}

/// Delete a phone
#[utoipa::path(
    delete,
    path = "/phones/{id}",
    tag = "phones",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Phone ID")
    ),
    responses(
        (status = 204, description = "Phone deleted"),
        (status = 404, description = "Phone not found"),
        (status = 422, description = "Phone has an open allocation")
    )
)]
pub async fn delete_phone(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.phones.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
