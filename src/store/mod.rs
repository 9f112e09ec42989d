//! Record store: authoritative state for phones, employees and allocations.
//!
//! Two interchangeable implementations exist behind the [`RecordStore`] trait,
//! selected at startup: [`memory::MemoryStore`] for in-process state and
//! [`postgres::PgStore`] for a PostgreSQL backend. Both enforce the status
//! invariant: a phone has status `Allocated` if and only if exactly one
//! allocation references it, and the paired "write allocation + update phone
//! status" mutation is never observable half-applied.

pub mod fixtures;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        Allocation, CreateAllocation, CreateEmployee, CreatePhone, Employee, Phone,
        UpdateEmployee, UpdatePhone,
    },
};

/// Storage contract shared by the in-memory and PostgreSQL backends.
///
/// Guards live here, not in the handlers: deleting a referenced phone or
/// employee, allocating a non-available phone, and editing a phone's status
/// into or out of `Allocated` are all rejected by the store itself.
#[async_trait]
pub trait RecordStore: Send + Sync {
    // Phones
    async fn list_phones(&self) -> AppResult<Vec<Phone>>;
    async fn get_phone(&self, id: Uuid) -> AppResult<Phone>;
    /// Create a phone with a fresh id. A requested status of `Allocated` is
    /// rejected: that status is only ever derived from allocations.
    async fn create_phone(&self, data: CreatePhone) -> AppResult<Phone>;
    /// Replace all mutable fields of a phone. Status may only move between
    /// `Available` and `Maintenance`; any edit that disagrees with the
    /// allocation set fails with a precondition error.
    async fn update_phone(&self, id: Uuid, data: UpdatePhone) -> AppResult<Phone>;
    /// Delete a phone. Fails while an allocation references it.
    async fn delete_phone(&self, id: Uuid) -> AppResult<()>;

    // Employees
    async fn list_employees(&self) -> AppResult<Vec<Employee>>;
    async fn get_employee(&self, id: Uuid) -> AppResult<Employee>;
    async fn create_employee(&self, data: CreateEmployee) -> AppResult<Employee>;
    async fn update_employee(&self, id: Uuid, data: UpdateEmployee) -> AppResult<Employee>;
    /// Delete an employee. Fails while the employee holds any allocation.
    async fn delete_employee(&self, id: Uuid) -> AppResult<()>;

    // Allocations
    async fn list_allocations(&self) -> AppResult<Vec<Allocation>>;
    async fn allocations_for_employee(&self, employee_id: Uuid) -> AppResult<Vec<Allocation>>;
    async fn allocation_for_phone(&self, phone_id: Uuid) -> AppResult<Option<Allocation>>;
    /// Create an allocation and set the referenced phone to `Allocated` as a
    /// single atomic step. The phone must currently be `Available`.
    async fn create_allocation(&self, data: CreateAllocation) -> AppResult<Allocation>;
    /// Delete an allocation and revert the referenced phone to `Available` as
    /// a single atomic step. A missing (orphaned) phone does not fail the
    /// delete.
    async fn delete_allocation(&self, id: Uuid) -> AppResult<()>;
}
