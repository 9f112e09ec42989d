//! PostgreSQL record store.
//!
//! Column names follow the original schema exactly: `phone_number`,
//! `purchase_date`, `allocation_date`, `expected_return_date`, `employee_id`,
//! `phone_id`. The paired allocation/status writes run inside a single
//! transaction with the phone row locked, so the status invariant holds even
//! across a crash between the two statements.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::RecordStore;
use crate::{
    error::{AppError, AppResult},
    models::{
        Allocation, CreateAllocation, CreateEmployee, CreatePhone, Employee, Phone, PhoneStatus,
        UpdateEmployee, UpdatePhone,
    },
};

#[derive(Clone)]
pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn list_phones(&self) -> AppResult<Vec<Phone>> {
        let phones = sqlx::query_as::<_, Phone>("SELECT * FROM phones ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(phones)
    }

    async fn get_phone(&self, id: Uuid) -> AppResult<Phone> {
        sqlx::query_as::<_, Phone>("SELECT * FROM phones WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Phone {} not found", id)))
    }

    async fn create_phone(&self, data: CreatePhone) -> AppResult<Phone> {
        let status = data.status.unwrap_or(PhoneStatus::Available);
        if status == PhoneStatus::Allocated {
            return Err(AppError::Precondition(
                "A phone cannot be created as Allocated; create an allocation instead".to_string(),
            ));
        }

        let phone = sqlx::query_as::<_, Phone>(
            r#"
            INSERT INTO phones (phone_number, model, purchase_date, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.phone_number)
        .bind(&data.model)
        .bind(data.purchase_date)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;
        Ok(phone)
    }

    async fn update_phone(&self, id: Uuid, data: UpdatePhone) -> AppResult<Phone> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Phone>("SELECT * FROM phones WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Phone {} not found", id)))?;

        let allocated: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM allocations WHERE phone_id = $1)")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

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

        let phone = sqlx::query_as::<_, Phone>(
            r#"
            UPDATE phones
            SET phone_number = $1, model = $2, purchase_date = $3, status = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&data.phone_number)
        .bind(&data.model)
        .bind(data.purchase_date)
        .bind(data.status)
        .bind(current.id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(phone)
    }

    async fn delete_phone(&self, id: Uuid) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let allocated: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM allocations WHERE phone_id = $1)")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        if allocated {
            return Err(AppError::Precondition(
                "Phone has an open allocation and cannot be deleted".to_string(),
            ));
        }

        let result = sqlx::query("DELETE FROM phones WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Phone {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }

    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    async fn get_employee(&self, id: Uuid) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))
    }

    async fn create_employee(&self, data: CreateEmployee) -> AppResult<Employee> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (name, department, position, email)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.department)
        .bind(&data.position)
        .bind(&data.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn update_employee(&self, id: Uuid, data: UpdateEmployee) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employees
            SET name = $1, department = $2, position = $3, email = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.department)
        .bind(&data.position)
        .bind(&data.email)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))
    }

    async fn delete_employee(&self, id: Uuid) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let has_allocations: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM allocations WHERE employee_id = $1)")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        if has_allocations {
            return Err(AppError::Precondition(
                "Employee has open allocations and cannot be deleted".to_string(),
            ));
        }

        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Employee {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }

    async fn list_allocations(&self) -> AppResult<Vec<Allocation>> {
        let allocations = sqlx::query_as::<_, Allocation>(
            "SELECT * FROM allocations ORDER BY allocation_date DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(allocations)
    }

    async fn allocations_for_employee(&self, employee_id: Uuid) -> AppResult<Vec<Allocation>> {
        let allocations = sqlx::query_as::<_, Allocation>(
            "SELECT * FROM allocations WHERE employee_id = $1 ORDER BY allocation_date DESC",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(allocations)
    }

    async fn allocation_for_phone(&self, phone_id: Uuid) -> AppResult<Option<Allocation>> {
        let allocation =
            sqlx::query_as::<_, Allocation>("SELECT * FROM allocations WHERE phone_id = $1")
                .bind(phone_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(allocation)
    }

    async fn create_allocation(&self, data: CreateAllocation) -> AppResult<Allocation> {
        let mut tx = self.pool.begin().await?;

        // Lock the phone row for the duration of the insert + status flip.
        let phone = sqlx::query_as::<_, Phone>("SELECT * FROM phones WHERE id = $1 FOR UPDATE")
            .bind(data.phone_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Phone {} not found", data.phone_id)))?;

        if phone.status != PhoneStatus::Available {
            return Err(AppError::Precondition(format!(
                "Phone {} is {} and cannot be allocated",
                phone.id, phone.status
            )));
        }

        let employee_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employees WHERE id = $1)")
                .bind(data.employee_id)
                .fetch_one(&mut *tx)
                .await?;
        if !employee_exists {
            return Err(AppError::NotFound(format!(
                "Employee {} not found",
                data.employee_id
            )));
        }

        let allocation_date = data
            .allocation_date
            .unwrap_or_else(|| Utc::now().date_naive());

        let allocation = sqlx::query_as::<_, Allocation>(
            r#"
            INSERT INTO allocations (phone_id, employee_id, allocation_date, expected_return_date, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(data.phone_id)
        .bind(data.employee_id)
        .bind(allocation_date)
        .bind(data.expected_return_date)
        .bind(&data.notes)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE phones SET status = $1 WHERE id = $2")
            .bind(PhoneStatus::Allocated)
            .bind(data.phone_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(allocation)
    }

    async fn delete_allocation(&self, id: Uuid) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let allocation =
            sqlx::query_as::<_, Allocation>("SELECT * FROM allocations WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Allocation {} not found", id)))?;

        sqlx::query("DELETE FROM allocations WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        // Zero rows affected means the phone itself is gone; the delete still
        // stands.
        sqlx::query("UPDATE phones SET status = $1 WHERE id = $2")
            .bind(PhoneStatus::Available)
            .bind(allocation.phone_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
