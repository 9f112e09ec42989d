//! Business logic services

pub mod allocations;
pub mod employees;
pub mod phones;
pub mod stats;
pub mod views;

use std::sync::Arc;

use crate::store::RecordStore;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub phones: phones::PhonesService,
    pub employees: employees::EmployeesService,
    pub allocations: allocations::AllocationsService,
    pub views: views::ViewsService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over the given record store
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            phones: phones::PhonesService::new(store.clone()),
            employees: employees::EmployeesService::new(store.clone()),
            allocations: allocations::AllocationsService::new(store.clone()),
            views: views::ViewsService::new(store.clone()),
            stats: stats::StatsService::new(store),
        }
    }
}
