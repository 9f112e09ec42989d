//! Employee model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Employee record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    /// Free-text department, used for grouping in stats
    pub department: String,
    pub position: String,
    pub email: String,
}

/// Create employee request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEmployee {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "department must not be empty"))]
    pub department: String,
    pub position: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
}

/// Update employee request (replaces all mutable fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEmployee {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "department must not be empty"))]
    pub department: String,
    pub position: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
}
