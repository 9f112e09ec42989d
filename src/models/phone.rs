//! Phone model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Lifecycle status of a phone.
///
/// `Allocated` is always derived from the allocation records: it is entered
/// only by creating an allocation and left only by deleting one. Direct edits
/// may only switch between `Available` and `Maintenance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "phone_status", rename_all = "PascalCase")]
pub enum PhoneStatus {
    Available,
    Allocated,
    Maintenance,
}

impl std::fmt::Display for PhoneStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PhoneStatus::Available => "Available",
            PhoneStatus::Allocated => "Allocated",
            PhoneStatus::Maintenance => "Maintenance",
        };
        write!(f, "{}", label)
    }
}

/// Phone record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Phone {
    pub id: Uuid,
    /// Contact number shown on the dashboard (not required unique)
    pub phone_number: String,
    /// Free-text device model
    pub model: String,
    pub purchase_date: NaiveDate,
    pub status: PhoneStatus,
}

/// Create phone request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePhone {
    #[validate(length(min = 1, message = "phone_number must not be empty"))]
    pub phone_number: String,
    #[validate(length(min = 1, message = "model must not be empty"))]
    pub model: String,
    pub purchase_date: NaiveDate,
    /// Defaults to Available; Allocated is rejected (derived status only)
    pub status: Option<PhoneStatus>,
}

/// Update phone request (replaces all mutable fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePhone {
    #[validate(length(min = 1, message = "phone_number must not be empty"))]
    pub phone_number: String,
    #[validate(length(min = 1, message = "model must not be empty"))]
    pub model: String,
    pub purchase_date: NaiveDate,
    pub status: PhoneStatus,
}
