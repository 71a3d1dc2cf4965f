use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{AttendanceStore, EmployeeStore, StoreError, StoreStatus};
use crate::model::{
    attendance::AttendanceRecord,
    employee::{Employee, UpsertOutcome},
};

/// Process-local store for development and tests. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    employees: RwLock<HashMap<String, Employee>>,
    attendance: RwLock<HashMap<(String, NaiveDate), AttendanceRecord>>,
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Connection("memory store lock poisoned".to_string())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn employees(&self) -> Result<RwLockReadGuard<'_, HashMap<String, Employee>>, StoreError> {
        self.employees.read().map_err(poisoned)
    }

    fn employees_mut(
        &self,
    ) -> Result<RwLockWriteGuard<'_, HashMap<String, Employee>>, StoreError> {
        self.employees.write().map_err(poisoned)
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, StoreError> {
        Ok(self.employees()?.get(id).cloned())
    }

    async fn upsert(&self, employee: &Employee) -> Result<UpsertOutcome, StoreError> {
        let mut employees = self.employees_mut()?;
        match employees.get_mut(&employee.id) {
            Some(existing) => {
                existing.merge(employee.clone());
                Ok(UpsertOutcome::Updated)
            }
            None => {
                employees.insert(employee.id.clone(), employee.clone());
                Ok(UpsertOutcome::Inserted)
            }
        }
    }

    async fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        let mut all: Vec<Employee> = self.employees()?.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }
}

#[async_trait]
impl AttendanceStore for MemoryStore {
    async fn find_by_key(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>, StoreError> {
        let attendance = self.attendance.read().map_err(poisoned)?;
        Ok(attendance.get(&(employee_id.to_string(), date)).cloned())
    }

    async fn upsert(&self, record: &AttendanceRecord) -> Result<(), StoreError> {
        self.attendance
            .write()
            .map_err(poisoned)?
            .insert((record.employee_id.clone(), record.date), record.clone());
        Ok(())
    }

    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>, StoreError> {
        let attendance = self.attendance.read().map_err(poisoned)?;
        Ok(attendance
            .values()
            .filter(|r| r.date == date)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl StoreStatus for MemoryStore {
    async fn collections(&self) -> Result<Vec<String>, StoreError> {
        Ok(vec!["attendance".to_string(), "employee".to_string()])
    }
}
