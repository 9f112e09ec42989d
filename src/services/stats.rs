//! Dashboard statistics service

use std::sync::Arc;

use crate::{
    api::stats::{
        AllocationStats, EmployeeStats, PhoneStats, RecentAllocation, StatEntry, StatsResponse,
    },
    error::AppResult,
    models::PhoneStatus,
    store::RecordStore,
};

/// How many entries the recent-allocations panel shows
const RECENT_ALLOCATIONS: usize = 5;

#[derive(Clone)]
pub struct StatsService {
    store: Arc<dyn RecordStore>,
}

impl StatsService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Compute the dashboard statistics from the current collections
    pub async fn get_stats(&self) -> AppResult<StatsResponse> {
        let phones = self.store.list_phones().await?;
        let employees = self.store.list_employees().await?;
        let allocations = self.store.list_allocations().await?;

        let phone_stats = PhoneStats {
            total: phones.len() as i64,
            available: phones
                .iter()
                .filter(|p| p.status == PhoneStatus::Available)
                .count() as i64,
            allocated: phones
                .iter()
                .filter(|p| p.status == PhoneStatus::Allocated)
                .count() as i64,
            maintenance: phones
                .iter()
                .filter(|p| p.status == PhoneStatus::Maintenance)
                .count() as i64,
        };

        let with_phone = employees
            .iter()
            .filter(|e| allocations.iter().any(|a| a.employee_id == e.id))
            .count() as i64;

        // Allocations per department, insertion-ordered by first appearance
        let mut by_department: Vec<StatEntry> = Vec::new();
        for allocation in &allocations {
            let Some(employee) = employees.iter().find(|e| e.id == allocation.employee_id)
            else {
                continue;
            };
            match by_department
                .iter_mut()
                .find(|entry| entry.label == employee.department)
            {
                Some(entry) => entry.value += 1,
                None => by_department.push(StatEntry {
                    label: employee.department.clone(),
                    value: 1,
                }),
            }
        }

        let mut recent: Vec<RecentAllocation> = allocations
            .iter()
            .map(|a| {
                let phone = phones.iter().find(|p| p.id == a.phone_id);
                let employee = employees.iter().find(|e| e.id == a.employee_id);
                RecentAllocation {
                    id: a.id,
                    allocation_date: a.allocation_date,
                    phone_model: phone.map(|p| p.model.clone()).unwrap_or_default(),
                    phone_number: phone.map(|p| p.phone_number.clone()).unwrap_or_default(),
                    employee_name: employee.map(|e| e.name.clone()).unwrap_or_default(),
                    department: employee.map(|e| e.department.clone()).unwrap_or_default(),
                }
            })
            .collect();
        recent.sort_by(|a, b| b.allocation_date.cmp(&a.allocation_date));
        recent.truncate(RECENT_ALLOCATIONS);

        Ok(StatsResponse {
            phones: phone_stats,
            employees: EmployeeStats {
                total: employees.len() as i64,
                with_phone,
            },
            allocations: AllocationStats {
                total: allocations.len() as i64,
                by_department,
                recent,
            },
        })
    }
}
