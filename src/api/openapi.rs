//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{allocations, employees, health, phones, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PhoneDesk API",
        version = "1.0.0",
        description = "Office Phone Allocation Tracker REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Phones
        phones::list_phones,
        phones::list_phone_details,
        phones::get_phone,
        phones::get_phone_allocation,
        phones::create_phone,
        phones::update_phone,
        phones::delete_phone,
        // Employees
        employees::list_employees,
        employees::list_employee_details,
        employees::get_employee,
        employees::get_employee_allocations,
        employees::create_employee,
        employees::update_employee,
        employees::delete_employee,
        // Allocations
        allocations::list_allocations,
        allocations::create_allocation,
        allocations::delete_allocation,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Phones
            crate::models::phone::Phone,
            crate::models::phone::PhoneStatus,
            crate::models::phone::CreatePhone,
            crate::models::phone::UpdatePhone,
            // Employees
            crate::models::employee::Employee,
            crate::models::employee::CreateEmployee,
            crate::models::employee::UpdateEmployee,
            // Allocations
            crate::models::allocation::Allocation,
            crate::models::allocation::CreateAllocation,
            // Views
            crate::views::PhoneWithAllocation,
            crate::views::PhoneAllocationDetail,
            crate::views::EmployeeWithAllocations,
            crate::views::EmployeeAllocationDetail,
            // Stats
            stats::StatsResponse,
            stats::PhoneStats,
            stats::EmployeeStats,
            stats::AllocationStats,
            stats::StatEntry,
            stats::RecentAllocation,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "phones", description = "Phone management"),
        (name = "employees", description = "Employee management"),
        (name = "allocations", description = "Phone allocation management"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
