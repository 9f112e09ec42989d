//! View composer: read-only joined projections over the three base
//! collections.
//!
//! These are pure functions; they take whatever the record store listed and
//! recompute the joins from scratch on every call. Ordering is whatever the
//! store produced. A dangling reference never raises: an allocation whose
//! employee is gone leaves the phone unannotated, and one whose phone is gone
//! carries no phone in the employee view.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Allocation, Employee, Phone};

/// Phone annotated with its current allocation, if any
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PhoneWithAllocation {
    pub phone: Phone,
    pub allocation: Option<PhoneAllocationDetail>,
}

/// Allocation detail attached to a phone
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PhoneAllocationDetail {
    pub id: Uuid,
    pub employee: Employee,
    pub allocation_date: NaiveDate,
    pub expected_return_date: Option<NaiveDate>,
}

/// Employee annotated with all their allocations
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EmployeeWithAllocations {
    pub employee: Employee,
    pub allocations: Vec<EmployeeAllocationDetail>,
}

/// Allocation detail attached to an employee. The phone is absent when the
/// allocation references a phone that no longer exists.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EmployeeAllocationDetail {
    pub id: Uuid,
    pub phone: Option<Phone>,
    pub allocation_date: NaiveDate,
    pub expected_return_date: Option<NaiveDate>,
}

/// Annotate each phone with its (at most one) allocation and the allocated
/// employee. An allocation referencing a missing employee is dropped from the
/// view.
pub fn phones_with_allocations(
    phones: &[Phone],
    allocations: &[Allocation],
    employees: &[Employee],
) -> Vec<PhoneWithAllocation> {
    phones
        .iter()
        .map(|phone| {
            let allocation = allocations
                .iter()
                .find(|a| a.phone_id == phone.id)
                .and_then(|a| {
                    let employee = employees.iter().find(|e| e.id == a.employee_id)?;
                    Some(PhoneAllocationDetail {
                        id: a.id,
                        employee: employee.clone(),
                        allocation_date: a.allocation_date,
                        expected_return_date: a.expected_return_date,
                    })
                });
            PhoneWithAllocation {
                phone: phone.clone(),
                allocation,
            }
        })
        .collect()
}

/// Annotate each employee with the list of their allocations, each carrying
/// the referenced phone when it still exists.
pub fn employees_with_allocations(
    employees: &[Employee],
    allocations: &[Allocation],
    phones: &[Phone],
) -> Vec<EmployeeWithAllocations> {
    employees
        .iter()
        .map(|employee| {
            let details = allocations
                .iter()
                .filter(|a| a.employee_id == employee.id)
                .map(|a| EmployeeAllocationDetail {
                    id: a.id,
                    phone: phones.iter().find(|p| p.id == a.phone_id).cloned(),
                    allocation_date: a.allocation_date,
                    expected_return_date: a.expected_return_date,
                })
                .collect();
            EmployeeWithAllocations {
                employee: employee.clone(),
                allocations: details,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PhoneStatus;

    fn phone(status: PhoneStatus) -> Phone {
        Phone {
            id: Uuid::new_v4(),
            phone_number: "13800000001".to_string(),
            model: "iPhone 13".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            status,
        }
    }

    fn employee(name: &str) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: name.to_string(),
            department: "Engineering".to_string(),
            position: "Engineer".to_string(),
            email: "e@example.com".to_string(),
        }
    }

    fn allocation(phone_id: Uuid, employee_id: Uuid) -> Allocation {
        Allocation {
            id: Uuid::new_v4(),
            phone_id,
            employee_id,
            allocation_date: NaiveDate::from_ymd_opt(2023, 5, 10).unwrap(),
            expected_return_date: Some(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()),
            notes: None,
        }
    }

    #[test]
    fn phones_view_annotates_allocated_phones_only() {
        let p1 = phone(PhoneStatus::Available);
        let p2 = phone(PhoneStatus::Allocated);
        let e1 = employee("Alice");
        let a1 = allocation(p2.id, e1.id);

        let view = phones_with_allocations(
            &[p1.clone(), p2.clone()],
            std::slice::from_ref(&a1),
            std::slice::from_ref(&e1),
        );

        assert_eq!(view.len(), 2);
        assert_eq!(view[0].phone.id, p1.id);
        assert!(view[0].allocation.is_none());

        let detail = view[1].allocation.as_ref().unwrap();
        assert_eq!(view[1].phone.id, p2.id);
        assert_eq!(detail.id, a1.id);
        assert_eq!(detail.employee.id, e1.id);
        assert_eq!(detail.allocation_date, a1.allocation_date);
        assert_eq!(detail.expected_return_date, a1.expected_return_date);
    }

    #[test]
    fn employees_view_collects_all_allocations() {
        let p1 = phone(PhoneStatus::Allocated);
        let p2 = phone(PhoneStatus::Allocated);
        let e1 = employee("Alice");
        let e2 = employee("Bob");
        let a1 = allocation(p1.id, e1.id);
        let a2 = allocation(p2.id, e1.id);

        let view = employees_with_allocations(
            &[e1.clone(), e2.clone()],
            &[a1.clone(), a2.clone()],
            &[p1.clone(), p2.clone()],
        );

        assert_eq!(view[0].allocations.len(), 2);
        assert_eq!(
            view[0].allocations[0].phone.as_ref().unwrap().id,
            p1.id
        );
        assert!(view[1].allocations.is_empty());
    }

    #[test]
    fn missing_employee_leaves_the_phone_unannotated() {
        let p = phone(PhoneStatus::Allocated);
        let a = allocation(p.id, Uuid::new_v4());

        let view =
            phones_with_allocations(std::slice::from_ref(&p), std::slice::from_ref(&a), &[]);
        assert!(view[0].allocation.is_none());
    }

    #[test]
    fn missing_phone_yields_an_absent_phone_reference() {
        let e = employee("Alice");
        let a = allocation(Uuid::new_v4(), e.id);

        let view =
            employees_with_allocations(std::slice::from_ref(&e), std::slice::from_ref(&a), &[]);
        assert_eq!(view[0].allocations.len(), 1);
        assert!(view[0].allocations[0].phone.is_none());
    }
}
