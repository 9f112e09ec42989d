//! Allocation endpoints (allocate / unallocate)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Allocation, CreateAllocation},
};

use super::AuthenticatedUser;

/// List all allocations
#[utoipa::path(
    get,
    path = "/allocations",
    tag = "allocations",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All allocations", body = Vec<Allocation>)
    )
)]
pub async fn list_allocations(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Allocation>>> {
    let allocations = state.services.allocations.list().await?;
    Ok(Json(allocations))
}

/// Allocate a phone to an employee.
///
/// The referenced phone must be Available; its status flips to Allocated as
/// part of the same operation.
#[utoipa::path(
    post,
    path = "/allocations",
    tag = "allocations",
    security(("bearer_auth" = [])),
    request_body = CreateAllocation,
    responses(
        (status = 201, description = "Allocation created", body = Allocation),
        (status = 404, description = "Phone or employee not found"),
        (status = 422, description = "Phone is not available")
    )
)]
pub async fn create_allocation(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(request): Json<CreateAllocation>,
) -> AppResult<(StatusCode, Json<Allocation>)> {
    let allocation = state.services.allocations.create(request).await?;
    Ok((StatusCode::CREATED, Json(allocation)))
}

/// Unallocate: delete the allocation and return the phone to Available
#[utoipa::path(
    delete,
    path = "/allocations/{id}",
    tag = "allocations",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Allocation ID")
    ),
    responses(
        (status = 204, description = "Allocation deleted"),
        (status = 404, description = "Allocation not found")
    )
)]
pub async fn delete_allocation(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.allocations.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
