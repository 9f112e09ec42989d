//! Dashboard statistics endpoint

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppResult;

use super::AuthenticatedUser;

/// Statistics response for the dashboard
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    /// Phone statistics
    pub phones: PhoneStats,
    /// Employee statistics
    pub employees: EmployeeStats,
    /// Allocation statistics
    pub allocations: AllocationStats,
}

#[derive(Serialize, ToSchema)]
pub struct PhoneStats {
    /// Total number of phones
    pub total: i64,
    /// Phones currently available
    pub available: i64,
    /// Phones currently allocated
    pub allocated: i64,
    /// Phones in maintenance
    pub maintenance: i64,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeStats {
    /// Total number of employees
    pub total: i64,
    /// Employees holding at least one phone
    pub with_phone: i64,
}

#[derive(Serialize, ToSchema)]
pub struct AllocationStats {
    /// Total number of open allocations
    pub total: i64,
    /// Allocations grouped by the employee's department
    pub by_department: Vec<StatEntry>,
    /// Most recent allocations, newest first
    pub recent: Vec<RecentAllocation>,
}

#[derive(Serialize, ToSchema)]
pub struct StatEntry {
    /// Label
    pub label: String,
    /// Value
    pub value: i64,
}

/// Recent allocation summary for the dashboard panel
#[derive(Serialize, ToSchema)]
pub struct RecentAllocation {
    pub id: Uuid,
    pub allocation_date: NaiveDate,
    pub phone_model: String,
    pub phone_number: String,
    pub employee_name: String,
    pub department: String,
}

/// Get dashboard statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard statistics", body = StatsResponse)
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<StatsResponse>> {
    let stats = state.services.stats.get_stats().await?;
    Ok(Json(stats))
}
