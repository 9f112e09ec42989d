//! Derived-view service: fetches the base collections and composes the joined
//! projections. Views are recomputed on every call; nothing is cached.

use std::sync::Arc;

use crate::{
    error::AppResult,
    store::RecordStore,
    views::{self, EmployeeWithAllocations, PhoneWithAllocation},
};

#[derive(Clone)]
pub struct ViewsService {
    store: Arc<dyn RecordStore>,
}

impl ViewsService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Phones annotated with their current allocation and employee
    pub async fn phones_with_allocations(&self) -> AppResult<Vec<PhoneWithAllocation>> {
        let phones = self.store.list_phones().await?;
        let allocations = self.store.list_allocations().await?;
        let employees = self.store.list_employees().await?;
        Ok(views::phones_with_allocations(
            &phones,
            &allocations,
            &employees,
        ))
    }

    /// Employees annotated with their allocations and phones
    pub async fn employees_with_allocations(&self) -> AppResult<Vec<EmployeeWithAllocations>> {
        let employees = self.store.list_employees().await?;
        let allocations = self.store.list_allocations().await?;
        let phones = self.store.list_phones().await?;
        Ok(views::employees_with_allocations(
            &employees,
            &allocations,
            &phones,
        ))
    }
}
