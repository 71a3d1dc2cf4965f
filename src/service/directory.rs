use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::{
    error::AttendanceError,
    model::employee::{Employee, UpsertOutcome},
    store::EmployeeStore,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct SeedReport {
    #[schema(example = 3)]
    pub inserted: usize,
    #[schema(example = 1)]
    pub updated: usize,
}

/// Static employee table: listing and idempotent seeding.
#[derive(Clone)]
pub struct EmployeeDirectory {
    employees: Arc<dyn EmployeeStore>,
}

impl EmployeeDirectory {
    pub fn new(employees: Arc<dyn EmployeeStore>) -> Self {
        Self { employees }
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, AttendanceError> {
        Ok(self.employees.list_all().await?)
    }

    /// Upsert every record by `id`. The whole batch is rejected up front if
    /// any id is blank.
    pub async fn seed_employees(
        &self,
        records: &[Employee],
    ) -> Result<SeedReport, AttendanceError> {
        if let Some(pos) = records.iter().position(|e| e.id.trim().is_empty()) {
            return Err(AttendanceError::invalid(format!(
                "Employee at index {} has an empty id",
                pos
            )));
        }

        let mut report = SeedReport::default();
        for employee in records {
            match self.employees.upsert(employee).await? {
                UpsertOutcome::Inserted => report.inserted += 1,
                UpsertOutcome::Updated => report.updated += 1,
            }
        }

        info!(
            inserted = report.inserted,
            updated = report.updated,
            "Employees seeded"
        );
        Ok(report)
    }
}
