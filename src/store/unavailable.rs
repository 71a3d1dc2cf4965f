//! Store whose every call fails as if the database were down.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{AttendanceStore, EmployeeStore, StoreError, StoreStatus};
use crate::model::{
    attendance::AttendanceRecord,
    employee::{Employee, UpsertOutcome},
};

#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

fn refused() -> StoreError {
    StoreError::Connection("connection refused".to_string())
}

#[async_trait]
impl EmployeeStore for UnavailableStore {
    async fn find_by_id(&self, _id: &str) -> Result<Option<Employee>, StoreError> {
        Err(refused())
    }

    async fn upsert(&self, _employee: &Employee) -> Result<UpsertOutcome, StoreError> {
        Err(refused())
    }

    async fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        Err(refused())
    }
}

#[async_trait]
impl AttendanceStore for UnavailableStore {
    async fn find_by_key(
        &self,
        _employee_id: &str,
        _date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>, StoreError> {
        Err(refused())
    }

    async fn upsert(&self, _record: &AttendanceRecord) -> Result<(), StoreError> {
        Err(refused())
    }

    async fn list_by_date(&self, _date: NaiveDate) -> Result<Vec<AttendanceRecord>, StoreError> {
        Err(refused())
    }
}

#[async_trait]
impl StoreStatus for UnavailableStore {
    async fn collections(&self) -> Result<Vec<String>, StoreError> {
        Err(refused())
    }
}
