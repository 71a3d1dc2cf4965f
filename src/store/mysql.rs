use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::MySqlPool;
use tracing::{debug, error};

use super::{AttendanceStore, EmployeeStore, StoreError, StoreStatus};
use crate::model::{
    attendance::AttendanceRecord,
    employee::{Employee, UpsertOutcome},
};

#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

fn log_failure(op: &'static str) -> impl Fn(sqlx::Error) -> StoreError {
    move |e| {
        error!(error = %e, op, "Store query failed");
        StoreError::from(e)
    }
}

#[async_trait]
impl EmployeeStore for MySqlStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, StoreError> {
        sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, designation, department, picture_url
            FROM employee
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(log_failure("employee.find_by_id"))
    }

    async fn upsert(&self, employee: &Employee) -> Result<UpsertOutcome, StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(log_failure("employee.upsert"))?;

        let found = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS(SELECT 1 FROM employee WHERE id = ? LIMIT 1)",
        )
        .bind(&employee.id)
        .fetch_one(&mut *tx)
        .await
        .map_err(log_failure("employee.upsert"))?;

        sqlx::query(
            r#"
            INSERT INTO employee (id, name, designation, department, picture_url)
            VALUES (?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                name = VALUES(name),
                designation = COALESCE(VALUES(designation), designation),
                department = COALESCE(VALUES(department), department),
                picture_url = COALESCE(VALUES(picture_url), picture_url)
            "#,
        )
        .bind(&employee.id)
        .bind(&employee.name)
        .bind(&employee.designation)
        .bind(&employee.department)
        .bind(&employee.picture_url)
        .execute(&mut *tx)
        .await
        .map_err(log_failure("employee.upsert"))?;

        tx.commit().await.map_err(log_failure("employee.upsert"))?;

        let outcome = if found != 0 {
            UpsertOutcome::Updated
        } else {
            UpsertOutcome::Inserted
        };
        debug!(employee_id = %employee.id, ?outcome, "Employee upserted");
        Ok(outcome)
    }

    async fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, name, designation, department, picture_url FROM employee ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(log_failure("employee.list_all"))
    }
}

#[async_trait]
impl AttendanceStore for MySqlStore {
    async fn find_by_key(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>, StoreError> {
        sqlx::query_as::<_, AttendanceRecord>(
            r#"
            SELECT date, employee_id, employee_name, entry_time, exit_time, worked_hours
            FROM attendance
            WHERE employee_id = ?
            AND date = ?
            "#,
        )
        .bind(employee_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(log_failure("attendance.find_by_key"))
    }

    async fn upsert(&self, record: &AttendanceRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO attendance
            (employee_id, date, employee_name, entry_time, exit_time, worked_hours)
            VALUES (?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                employee_name = VALUES(employee_name),
                entry_time = VALUES(entry_time),
                exit_time = VALUES(exit_time),
                worked_hours = VALUES(worked_hours)
            "#,
        )
        .bind(&record.employee_id)
        .bind(record.date)
        .bind(&record.employee_name)
        .bind(record.entry_time)
        .bind(record.exit_time)
        .bind(&record.worked_hours)
        .execute(&self.pool)
        .await
        .map_err(log_failure("attendance.upsert"))?;

        Ok(())
    }

    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>, StoreError> {
        sqlx::query_as::<_, AttendanceRecord>(
            r#"
            SELECT date, employee_id, employee_name, entry_time, exit_time, worked_hours
            FROM attendance
            WHERE date = ?
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(log_failure("attendance.list_by_date"))
    }
}

#[async_trait]
impl StoreStatus for MySqlStore {
    async fn collections(&self) -> Result<Vec<String>, StoreError> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT CAST(table_name AS CHAR)
            FROM information_schema.tables
            WHERE table_schema = DATABASE()
            ORDER BY table_name
            LIMIT 10
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(log_failure("status.collections"))
    }
}
