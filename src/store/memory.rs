//! In-memory record store.
//!
//! Collections live inside the store value behind one `RwLock`; there is no
//! module-level state, so independent instances (one per test, for example)
//! never interfere. Listing preserves insertion order.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{fixtures, RecordStore};
use crate::{
    error::{AppError, AppResult},
    models::{
        Allocation, CreateAllocation, CreateEmployee, CreatePhone, Employee, Phone, PhoneStatus,
        UpdateEmployee, UpdatePhone,
    },
};

#[derive(Default)]
struct Collections {
    phones: Vec<Phone>,
    employees: Vec<Employee>,
    allocations: Vec<Allocation>,
}

/// In-process store, optionally seeded with fixture data.
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Collections::default()),
        }
    }

    /// Create a store preloaded with the demo dataset.
    pub fn seeded() -> Self {
        let (phones, employees, allocations) = fixtures::seed();
        Self {
            inner: RwLock::new(Collections {
                phones,
                employees,
                allocations,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_phones(&self) -> AppResult<Vec<Phone>> {
        Ok(self.inner.read().await.phones.clone())
    }

    async fn get_phone(&self, id: Uuid) -> AppResult<Phone> {
        self.inner
            .read()
            .await
            .phones
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Phone {} not found", id)))
    }

    async fn create_phone(&self, data: CreatePhone) -> AppResult<Phone> {
        let status = data.status.unwrap_or(PhoneStatus::Available);
        if status == PhoneStatus::Allocated {
            return Err(AppError::Precondition(
                "A phone cannot be created as Allocated; create an allocation instead".to_string(),
            ));
        }

        let phone = Phone {
            id: Uuid::new_v4(),
            phone_number: data.phone_number,
            model: data.model,
            purchase_date: data.purchase_date,
            status,
        };
        self.inner.write().await.phones.push(phone.clone());
        Ok(phone)
    }

    async fn update_phone(&self, id: Uuid, data: UpdatePhone) -> AppResult<Phone> {
        let mut inner = self.inner.write().await;

        let index = inner
            .phones
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Phone {} not found", id)))?;

        let allocated = inner.allocations.iter().any(|a| a.phone_id == id);
        if allocated && data.status != PhoneStatus::Allocated {
            return Err(AppError::Precondition(
                "Phone has an open allocation; delete the allocation to change its status"
                    .to_string(),
            ));
        }
        if !allocated && data.status == PhoneStatus::Allocated {
            return Err(AppError::Precondition(
                "Allocated status is derived from allocations and cannot be set directly"
                    .to_string(),
            ));
        }

        let phone = &mut inner.phones[index];
        phone.phone_number = data.phone_number;
        phone.model = data.model;
        phone.purchase_date = data.purchase_date;
        phone.status = data.status;
        Ok(phone.clone())
    }

    async fn delete_phone(&self, id: Uuid) -> AppResult<()> {
        let mut inner = self.inner.write().await;

        if inner.allocations.iter().any(|a| a.phone_id == id) {
            return Err(AppError::Precondition(
                "Phone has an open allocation and cannot be deleted".to_string(),
            ));
        }

        let before = inner.phones.len();
        inner.phones.retain(|p| p.id != id);
        if inner.phones.len() == before {
            return Err(AppError::NotFound(format!("Phone {} not found", id)));
        }
        Ok(())
    }

    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        Ok(self.inner.read().await.employees.clone())
    }

    async fn get_employee(&self, id: Uuid) -> AppResult<Employee> {
        self.inner
            .read()
            .await
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))
    }

    async fn create_employee(&self, data: CreateEmployee) -> AppResult<Employee> {
        let employee = Employee {
            id: Uuid::new_v4(),
            name: data.name,
            department: data.department,
            position: data.position,
            email: data.email,
        };
        self.inner.write().await.employees.push(employee.clone());
        Ok(employee)
    }

    async fn update_employee(&self, id: Uuid, data: UpdateEmployee) -> AppResult<Employee> {
        let mut inner = self.inner.write().await;
        let employee = inner
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))?;

        employee.name = data.name;
        employee.department = data.department;
        employee.position = data.position;
        employee.email = data.email;
        Ok(employee.clone())
    }

    async fn delete_employee(&self, id: Uuid) -> AppResult<()> {
        let mut inner = self.inner.write().await;

        if inner.allocations.iter().any(|a| a.employee_id == id) {
            return Err(AppError::Precondition(
                "Employee has open allocations and cannot be deleted".to_string(),
            ));
        }

        let before = inner.employees.len();
        inner.employees.retain(|e| e.id != id);
        if inner.employees.len() == before {
            return Err(AppError::NotFound(format!("Employee {} not found", id)));
        }
        Ok(())
    }

    async fn list_allocations(&self) -> AppResult<Vec<Allocation>> {
        Ok(self.inner.read().await.allocations.clone())
    }

    async fn allocations_for_employee(&self, employee_id: Uuid) -> AppResult<Vec<Allocation>> {
        Ok(self
            .inner
            .read()
            .await
            .allocations
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn allocation_for_phone(&self, phone_id: Uuid) -> AppResult<Option<Allocation>> {
        Ok(self
            .inner
            .read()
            .await
            .allocations
            .iter()
            .find(|a| a.phone_id == phone_id)
            .cloned())
    }

    async fn create_allocation(&self, data: CreateAllocation) -> AppResult<Allocation> {
        // One write lock covers the precondition checks, the insert and the
        // status flip, so no intermediate state is observable.
        let mut inner = self.inner.write().await;

        if !inner.employees.iter().any(|e| e.id == data.employee_id) {
            return Err(AppError::NotFound(format!(
                "Employee {} not found",
                data.employee_id
            )));
        }

        let phone = inner
            .phones
            .iter_mut()
            .find(|p| p.id == data.phone_id)
            .ok_or_else(|| AppError::NotFound(format!("Phone {} not found", data.phone_id)))?;

        if phone.status != PhoneStatus::Available {
            return Err(AppError::Precondition(format!(
                "Phone {} is {} and cannot be allocated",
                phone.id, phone.status
            )));
        }

        phone.status = PhoneStatus::Allocated;

        let allocation = Allocation {
            id: Uuid::new_v4(),
            phone_id: data.phone_id,
            employee_id: data.employee_id,
            allocation_date: data
                .allocation_date
                .unwrap_or_else(|| Utc::now().date_naive()),
            expected_return_date: data.expected_return_date,
            notes: data.notes,
        };
        inner.allocations.push(allocation.clone());
        Ok(allocation)
    }

    async fn delete_allocation(&self, id: Uuid) -> AppResult<()> {
        let mut inner = self.inner.write().await;

        let position = inner
            .allocations
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Allocation {} not found", id)))?;
        let allocation = inner.allocations.remove(position);

        // An orphaned allocation (phone already gone) still deletes cleanly.
        if let Some(phone) = inner
            .phones
            .iter_mut()
            .find(|p| p.id == allocation.phone_id)
        {
            phone.status = PhoneStatus::Available;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_phone(number: &str) -> CreatePhone {
        CreatePhone {
            phone_number: number.to_string(),
            model: "Test Model".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            status: None,
        }
    }

    fn new_employee(name: &str) -> CreateEmployee {
        CreateEmployee {
            name: name.to_string(),
            department: "Engineering".to_string(),
            position: "Engineer".to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        }
    }

    fn allocate(phone_id: Uuid, employee_id: Uuid) -> CreateAllocation {
        CreateAllocation {
            phone_id,
            employee_id,
            allocation_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            expected_return_date: None,
            notes: None,
        }
    }

    /// status == Allocated iff exactly one allocation references the phone
    async fn assert_status_invariant(store: &MemoryStore) {
        let phones = store.list_phones().await.unwrap();
        let allocations = store.list_allocations().await.unwrap();
        for phone in &phones {
            let refs = allocations
                .iter()
                .filter(|a| a.phone_id == phone.id)
                .count();
            assert!(refs <= 1, "phone {} has {} allocations", phone.id, refs);
            assert_eq!(
                phone.status == PhoneStatus::Allocated,
                refs == 1,
                "phone {} status {} disagrees with {} referencing allocations",
                phone.id,
                phone.status,
                refs
            );
        }
    }

    #[tokio::test]
    async fn allocate_and_unallocate_round_trip() {
        let store = MemoryStore::new();
        let phone = store.create_phone(new_phone("1000")).await.unwrap();
        let employee = store.create_employee(new_employee("Alice")).await.unwrap();

        let allocation = store
            .create_allocation(allocate(phone.id, employee.id))
            .await
            .unwrap();
        assert_eq!(
            store.get_phone(phone.id).await.unwrap().status,
            PhoneStatus::Allocated
        );
        assert_status_invariant(&store).await;

        store.delete_allocation(allocation.id).await.unwrap();
        assert_eq!(
            store.get_phone(phone.id).await.unwrap().status,
            PhoneStatus::Available
        );
        assert!(store.list_allocations().await.unwrap().is_empty());
        assert_status_invariant(&store).await;
    }

    #[tokio::test]
    async fn double_allocation_is_rejected() {
        let store = MemoryStore::new();
        let phone = store.create_phone(new_phone("1000")).await.unwrap();
        let alice = store.create_employee(new_employee("Alice")).await.unwrap();
        let bob = store.create_employee(new_employee("Bob")).await.unwrap();

        store
            .create_allocation(allocate(phone.id, alice.id))
            .await
            .unwrap();
        let err = store
            .create_allocation(allocate(phone.id, bob.id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Precondition(_)));

        assert_eq!(store.list_allocations().await.unwrap().len(), 1);
        assert_status_invariant(&store).await;
    }

    #[tokio::test]
    async fn maintenance_phone_cannot_be_allocated() {
        let store = MemoryStore::new();
        let mut data = new_phone("1000");
        data.status = Some(PhoneStatus::Maintenance);
        let phone = store.create_phone(data).await.unwrap();
        let employee = store.create_employee(new_employee("Alice")).await.unwrap();

        let err = store
            .create_allocation(allocate(phone.id, employee.id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Precondition(_)));
    }

    #[tokio::test]
    async fn allocation_requires_existing_phone_and_employee() {
        let store = MemoryStore::new();
        let phone = store.create_phone(new_phone("1000")).await.unwrap();
        let employee = store.create_employee(new_employee("Alice")).await.unwrap();

        let err = store
            .create_allocation(allocate(Uuid::new_v4(), employee.id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = store
            .create_allocation(allocate(phone.id, Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        // Failed attempts left no trace
        assert!(store.list_allocations().await.unwrap().is_empty());
        assert_eq!(
            store.get_phone(phone.id).await.unwrap().status,
            PhoneStatus::Available
        );
    }

    #[tokio::test]
    async fn allocated_phone_and_its_employee_cannot_be_deleted() {
        let store = MemoryStore::new();
        let phone = store.create_phone(new_phone("1000")).await.unwrap();
        let employee = store.create_employee(new_employee("Alice")).await.unwrap();
        let allocation = store
            .create_allocation(allocate(phone.id, employee.id))
            .await
            .unwrap();

        assert!(matches!(
            store.delete_phone(phone.id).await.unwrap_err(),
            AppError::Precondition(_)
        ));
        assert!(matches!(
            store.delete_employee(employee.id).await.unwrap_err(),
            AppError::Precondition(_)
        ));

        // Both succeed once the allocation is gone
        store.delete_allocation(allocation.id).await.unwrap();
        store.delete_phone(phone.id).await.unwrap();
        store.delete_employee(employee.id).await.unwrap();
    }

    #[tokio::test]
    async fn status_edits_cannot_cross_the_allocated_boundary() {
        let store = MemoryStore::new();
        let phone = store.create_phone(new_phone("1000")).await.unwrap();
        let employee = store.create_employee(new_employee("Alice")).await.unwrap();

        let update = |status| UpdatePhone {
            phone_number: "1000".to_string(),
            model: "Test Model".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            status,
        };

        // Cannot set Allocated by hand
        assert!(matches!(
            store
                .update_phone(phone.id, update(PhoneStatus::Allocated))
                .await
                .unwrap_err(),
            AppError::Precondition(_)
        ));

        // Available <-> Maintenance is a plain edit
        store
            .update_phone(phone.id, update(PhoneStatus::Maintenance))
            .await
            .unwrap();
        store
            .update_phone(phone.id, update(PhoneStatus::Available))
            .await
            .unwrap();

        // Cannot leave Allocated while the allocation exists
        store
            .create_allocation(allocate(phone.id, employee.id))
            .await
            .unwrap();
        assert!(matches!(
            store
                .update_phone(phone.id, update(PhoneStatus::Available))
                .await
                .unwrap_err(),
            AppError::Precondition(_)
        ));
        assert_status_invariant(&store).await;
    }

    #[tokio::test]
    async fn phone_cannot_be_created_as_allocated() {
        let store = MemoryStore::new();
        let mut data = new_phone("1000");
        data.status = Some(PhoneStatus::Allocated);
        assert!(matches!(
            store.create_phone(data).await.unwrap_err(),
            AppError::Precondition(_)
        ));
    }

    #[tokio::test]
    async fn unknown_ids_fail_fast() {
        let store = MemoryStore::new();
        let id = Uuid::new_v4();
        assert!(matches!(
            store.get_phone(id).await.unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            store.get_employee(id).await.unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            store.delete_allocation(id).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn allocation_date_defaults_to_today() {
        let store = MemoryStore::new();
        let phone = store.create_phone(new_phone("1000")).await.unwrap();
        let employee = store.create_employee(new_employee("Alice")).await.unwrap();

        let mut data = allocate(phone.id, employee.id);
        data.allocation_date = None;
        let allocation = store.create_allocation(data).await.unwrap();
        assert_eq!(allocation.allocation_date, Utc::now().date_naive());
    }

    #[tokio::test]
    async fn seeded_store_satisfies_the_invariant() {
        let store = MemoryStore::seeded();
        assert_eq!(store.list_phones().await.unwrap().len(), 7);
        assert_eq!(store.list_employees().await.unwrap().len(), 7);
        assert_eq!(store.list_allocations().await.unwrap().len(), 3);
        assert_status_invariant(&store).await;
    }

    #[tokio::test]
    async fn listing_preserves_insertion_order() {
        let store = MemoryStore::new();
        let first = store.create_phone(new_phone("1")).await.unwrap();
        let second = store.create_phone(new_phone("2")).await.unwrap();
        let third = store.create_phone(new_phone("3")).await.unwrap();

        let ids: Vec<Uuid> = store
            .list_phones()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![first.id, second.id, third.id]);
    }

    #[tokio::test]
    async fn deleting_an_orphaned_allocation_succeeds() {
        let store = MemoryStore::new();
        let phone = store.create_phone(new_phone("1000")).await.unwrap();
        let employee = store.create_employee(new_employee("Alice")).await.unwrap();
        let allocation = store
            .create_allocation(allocate(phone.id, employee.id))
            .await
            .unwrap();

        // Drop the phone behind the store's back to simulate an orphan.
        store.inner.write().await.phones.retain(|p| p.id != phone.id);

        store.delete_allocation(allocation.id).await.unwrap();
        assert!(store.list_allocations().await.unwrap().is_empty());
    }
}
