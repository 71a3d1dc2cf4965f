use std::sync::Arc;

use chrono::{NaiveDateTime, SubsecRound};
use tracing::{info, instrument};

use crate::{
    error::AttendanceError,
    model::attendance::{AttendanceRecord, Gate},
    store::{AttendanceStore, EmployeeStore},
    utils::worked_hours::compute_worked_hours,
};

/// Folds gate scans into the employee's attendance record for the day.
#[derive(Clone)]
pub struct AttendanceReconciler {
    employees: Arc<dyn EmployeeStore>,
    attendance: Arc<dyn AttendanceStore>,
}

impl AttendanceReconciler {
    pub fn new(employees: Arc<dyn EmployeeStore>, attendance: Arc<dyn AttendanceStore>) -> Self {
        Self {
            employees,
            attendance,
        }
    }

    /// Apply one scan. The latest scan per gate direction wins: a second
    /// entry scan on the same day replaces the first entry time.
    #[instrument(name = "reconcile", skip(self, timestamp))]
    pub async fn reconcile(
        &self,
        employee_id: &str,
        gate: Gate,
        timestamp: NaiveDateTime,
    ) -> Result<AttendanceRecord, AttendanceError> {
        let employee = self
            .employees
            .find_by_id(employee_id)
            .await?
            .ok_or_else(|| AttendanceError::NotFound(employee_id.to_string()))?;

        let date = timestamp.date();
        let time = timestamp.time().trunc_subsecs(0);

        let mut record = self
            .attendance
            .find_by_key(employee_id, date)
            .await?
            .unwrap_or_else(|| AttendanceRecord::new(date, &employee));

        // snapshot taken on every write
        record.employee_name = employee.name;

        match gate {
            Gate::Entry => record.entry_time = Some(time),
            Gate::Exit => record.exit_time = Some(time),
        }
        record.worked_hours = compute_worked_hours(record.entry_time, record.exit_time);

        self.attendance.upsert(&record).await?;

        info!(
            %date,
            %time,
            worked_hours = record.worked_hours.as_deref().unwrap_or("-"),
            "Scan reconciled"
        );
        Ok(record)
    }
}
