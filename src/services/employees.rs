//! Employee management service

use std::sync::Arc;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{CreateEmployee, Employee, UpdateEmployee},
    store::RecordStore,
};

#[derive(Clone)]
pub struct EmployeesService {
    store: Arc<dyn RecordStore>,
}

impl EmployeesService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        self.store.list_employees().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Employee> {
        self.store.get_employee(id).await
    }

    pub async fn create(&self, data: CreateEmployee) -> AppResult<Employee> {
        self.store.create_employee(data).await
    }

    pub async fn update(&self, id: Uuid, data: UpdateEmployee) -> AppResult<Employee> {
        self.store.update_employee(id, data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.store.delete_employee(id).await
    }
}
