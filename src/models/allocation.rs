//! Allocation model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Allocation record pairing one phone with one employee.
///
/// At most one allocation may reference a given phone at a time. There is no
/// allocation history: unallocating removes the record entirely.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Allocation {
    pub id: Uuid,
    pub phone_id: Uuid,
    pub employee_id: Uuid,
    pub allocation_date: NaiveDate,
    /// Absent means open-ended
    pub expected_return_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Create allocation request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAllocation {
    pub phone_id: Uuid,
    pub employee_id: Uuid,
    /// Defaults to today when not supplied
    pub allocation_date: Option<NaiveDate>,
    pub expected_return_date: Option<NaiveDate>,
    pub notes: Option<String>,
}
