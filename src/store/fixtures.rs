//! Fixture data for the in-memory store.
//!
//! Mirrors the demo dataset of the original tracker: seven phones, seven
//! employees and three open allocations, with phone statuses consistent with
//! the allocation set.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Allocation, Employee, Phone, PhoneStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Fixture literals are all valid dates.
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

/// Build the seed collections. Allocations reference phones 2, 5 and 7 and
/// those phones are seeded as `Allocated`; phone 4 is in maintenance.
pub fn seed() -> (Vec<Phone>, Vec<Employee>, Vec<Allocation>) {
    let phones = vec![
        Phone {
            id: Uuid::new_v4(),
            phone_number: "13800000001".to_string(),
            model: "iPhone 13".to_string(),
            purchase_date: date(2023, 1, 15),
            status: PhoneStatus::Available,
        },
        Phone {
            id: Uuid::new_v4(),
            phone_number: "13800000002".to_string(),
            model: "Samsung Galaxy S21".to_string(),
            purchase_date: date(2023, 2, 20),
            status: PhoneStatus::Allocated,
        },
        Phone {
            id: Uuid::new_v4(),
            phone_number: "13800000003".to_string(),
            model: "Google Pixel 6".to_string(),
            purchase_date: date(2023, 3, 10),
            status: PhoneStatus::Available,
        },
        Phone {
            id: Uuid::new_v4(),
            phone_number: "13800000004".to_string(),
            model: "iPhone 12".to_string(),
            purchase_date: date(2022, 11, 5),
            status: PhoneStatus::Maintenance,
        },
        Phone {
            id: Uuid::new_v4(),
            phone_number: "13800000005".to_string(),
            model: "Huawei P40".to_string(),
            purchase_date: date(2023, 1, 25),
            status: PhoneStatus::Allocated,
        },
        Phone {
            id: Uuid::new_v4(),
            phone_number: "13800000006".to_string(),
            model: "Xiaomi Mi 11".to_string(),
            purchase_date: date(2023, 4, 18),
            status: PhoneStatus::Available,
        },
        Phone {
            id: Uuid::new_v4(),
            phone_number: "13800000007".to_string(),
            model: "OPPO Find X3".to_string(),
            purchase_date: date(2023, 2, 8),
            status: PhoneStatus::Allocated,
        },
    ];

    let employees = vec![
        Employee {
            id: Uuid::new_v4(),
            name: "Sarah Chen".to_string(),
            department: "Engineering".to_string(),
            position: "Software Engineer".to_string(),
            email: "sarah.chen@example.com".to_string(),
        },
        Employee {
            id: Uuid::new_v4(),
            name: "Marc Dubois".to_string(),
            department: "Marketing".to_string(),
            position: "Marketing Manager".to_string(),
            email: "marc.dubois@example.com".to_string(),
        },
        Employee {
            id: Uuid::new_v4(),
            name: "Priya Patel".to_string(),
            department: "Sales".to_string(),
            position: "Sales Representative".to_string(),
            email: "priya.patel@example.com".to_string(),
        },
        Employee {
            id: Uuid::new_v4(),
            name: "James Okafor".to_string(),
            department: "Finance".to_string(),
            position: "Financial Analyst".to_string(),
            email: "james.okafor@example.com".to_string(),
        },
        Employee {
            id: Uuid::new_v4(),
            name: "Ana Ruiz".to_string(),
            department: "Human Resources".to_string(),
            position: "HR Specialist".to_string(),
            email: "ana.ruiz@example.com".to_string(),
        },
        Employee {
            id: Uuid::new_v4(),
            name: "Tom Lindqvist".to_string(),
            department: "Engineering".to_string(),
            position: "Technical Director".to_string(),
            email: "tom.lindqvist@example.com".to_string(),
        },
        Employee {
            id: Uuid::new_v4(),
            name: "Mei Nakamura".to_string(),
            department: "Support".to_string(),
            position: "Support Lead".to_string(),
            email: "mei.nakamura@example.com".to_string(),
        },
    ];

    let allocations = vec![
        Allocation {
            id: Uuid::new_v4(),
            phone_id: phones[1].id,
            employee_id: employees[0].id,
            allocation_date: date(2023, 5, 10),
            expected_return_date: Some(date(2024, 5, 10)),
            notes: Some("Project phone".to_string()),
        },
        Allocation {
            id: Uuid::new_v4(),
            phone_id: phones[4].id,
            employee_id: employees[2].id,
            allocation_date: date(2023, 6, 15),
            expected_return_date: None,
            notes: Some("Long-term use".to_string()),
        },
        Allocation {
            id: Uuid::new_v4(),
            phone_id: phones[6].id,
            employee_id: employees[5].id,
            allocation_date: date(2023, 7, 20),
            expected_return_date: Some(date(2024, 1, 20)),
            notes: Some("Temporary project".to_string()),
        },
    ];

    (phones, employees, allocations)
}
