//! Employee management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Allocation, CreateEmployee, Employee, UpdateEmployee},
    views::EmployeeWithAllocations,
};

use super::AuthenticatedUser;

/// List all employees
#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All employees", body = Vec<Employee>)
    )
)]
pub async fn list_employees(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.services.employees.list().await?;
    Ok(Json(employees))
}

/// List all employees annotated with their allocations
#[utoipa::path(
    get,
    path = "/employees/details",
    tag = "employees",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Employees with allocation details", body = Vec<EmployeeWithAllocations>)
    )
)]
pub async fn list_employee_details(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<EmployeeWithAllocations>>> {
    let employees = state.services.views.employees_with_allocations().await?;
    Ok(Json(employees))
}

/// Get an employee by ID
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "employees",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "The employee", body = Employee),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Employee>> {
    let employee = state.services.employees.get_by_id(id).await?;
    Ok(Json(employee))
}

/// List the allocations held by an employee
#[utoipa::path(
    get,
    path = "/employees/{id}/allocations",
    tag = "employees",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "The employee's allocations", body = Vec<Allocation>),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee_allocations(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Allocation>>> {
    let allocations = state.services.allocations.for_employee(id).await?;
    Ok(Json(allocations))
}

/// Add an employee
#[utoipa::path(
    post,
    path = "/employees",
    tag = "employees",
    security(("bearer_auth" = [])),
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_employee(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(request): Json<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let employee = state.services.employees.create(request).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Update an employee (replaces all mutable fields)
#[utoipa::path(
    put,
    path = "/employees/{id}",
    tag = "employees",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn update_employee(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateEmployee>,
) -> AppResult<Json<Employee>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let employee = state.services.employees.update(id, request).await?;
    Ok(Json(employee))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "employees",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 404, description = "Employee not found"),
        (status = 422, description = "Employee has open allocations")
    )
)]
pub async fn delete_employee(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.employees.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
