use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;
use utoipa::ToSchema;

use crate::model::employee::Employee;

/// Scanner position. `scanner1`/`scanner2` are the hardware ids of the gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, strum_macros::Display)]
pub enum Gate {
    #[strum(to_string = "entry", serialize = "scanner1")]
    Entry,
    #[strum(to_string = "exit", serialize = "scanner2")]
    Exit,
}

/// One row per employee per calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "date": "2026-01-05",
    "employeeId": "EMP-001",
    "employeeName": "John Doe",
    "entryTime": "09:00:00",
    "exitTime": "17:30:00",
    "workedHours": "08:30"
}))]
pub struct AttendanceRecord {
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "EMP-001")]
    pub employee_id: String,
    /// Name copied from the employee when the record was last written
    #[schema(example = "John Doe")]
    pub employee_name: String,
    #[schema(example = "09:00:00", value_type = Option<String>)]
    pub entry_time: Option<NaiveTime>,
    #[schema(example = "17:30:00", value_type = Option<String>)]
    pub exit_time: Option<NaiveTime>,
    #[schema(example = "08:30", nullable = true)]
    pub worked_hours: Option<String>,
}

impl AttendanceRecord {
    pub fn new(date: NaiveDate, employee: &Employee) -> Self {
        Self {
            date,
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            entry_time: None,
            exit_time: None,
            worked_hours: None,
        }
    }
}

/// Attendance record joined with the static employee profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceView {
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "EMP-001")]
    pub employee_id: String,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "Machine Operator", nullable = true)]
    pub designation: Option<String>,
    #[schema(example = "Assembly", nullable = true)]
    pub department: Option<String>,
    #[schema(example = "https://cdn.example.com/emp-001.png", nullable = true)]
    pub employee_picture: Option<String>,
    #[schema(example = "09:00:00", value_type = Option<String>)]
    pub entry_time: Option<NaiveTime>,
    #[schema(example = "17:30:00", value_type = Option<String>)]
    pub exit_time: Option<NaiveTime>,
    #[schema(example = "08:30", nullable = true)]
    pub worked_hours: Option<String>,
}

impl AttendanceView {
    pub fn join(record: AttendanceRecord, employee: Employee) -> Self {
        let name = if record.employee_name.is_empty() {
            employee.name
        } else {
            record.employee_name
        };

        Self {
            date: record.date,
            employee_id: record.employee_id,
            name,
            designation: employee.designation,
            department: employee.department,
            employee_picture: employee.picture_url,
            entry_time: record.entry_time,
            exit_time: record.exit_time,
            worked_hours: record.worked_hours,
        }
    }
}
