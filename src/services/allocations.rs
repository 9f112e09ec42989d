//! Allocation management service

use std::sync::Arc;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Allocation, CreateAllocation},
    store::RecordStore,
};

#[derive(Clone)]
pub struct AllocationsService {
    store: Arc<dyn RecordStore>,
}

impl AllocationsService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Allocation>> {
        self.store.list_allocations().await
    }

    /// Get the allocations held by an employee
    pub async fn for_employee(&self, employee_id: Uuid) -> AppResult<Vec<Allocation>> {
        // Verify the employee exists so an unknown id reads as NotFound
        // rather than an empty list.
        self.store.get_employee(employee_id).await?;
        self.store.allocations_for_employee(employee_id).await
    }

    /// Get the current allocation of a phone, if any
    pub async fn for_phone(&self, phone_id: Uuid) -> AppResult<Option<Allocation>> {
        self.store.get_phone(phone_id).await?;
        self.store.allocation_for_phone(phone_id).await
    }

    /// Allocate a phone to an employee
    pub async fn create(&self, data: CreateAllocation) -> AppResult<Allocation> {
        self.store.create_allocation(data).await
    }

    /// Unallocate: delete the allocation and free the phone
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.store.delete_allocation(id).await
    }
}
