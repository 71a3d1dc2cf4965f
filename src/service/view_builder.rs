use std::sync::Arc;

use chrono::{Local, NaiveDate};
use futures::future::try_join_all;
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::{
    error::AttendanceError,
    model::attendance::AttendanceView,
    store::{AttendanceStore, EmployeeStore},
};

/// One day of attendance joined with employee profiles.
#[derive(Debug, Serialize, ToSchema)]
pub struct AttendanceSheet {
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub records: Vec<AttendanceView>,
}

#[derive(Clone)]
pub struct AttendanceViewBuilder {
    employees: Arc<dyn EmployeeStore>,
    attendance: Arc<dyn AttendanceStore>,
}

impl AttendanceViewBuilder {
    pub fn new(employees: Arc<dyn EmployeeStore>, attendance: Arc<dyn AttendanceStore>) -> Self {
        Self {
            employees,
            attendance,
        }
    }

    /// Attendance for `date` (server-local today when omitted), sorted by name.
    ///
    /// Records whose employee no longer exists are skipped. `department`
    /// matches exactly, case included.
    pub async fn list_attendance(
        &self,
        date: Option<NaiveDate>,
        department: Option<&str>,
    ) -> Result<AttendanceSheet, AttendanceError> {
        let date = date.unwrap_or_else(|| Local::now().date_naive());

        let records = self.attendance.list_by_date(date).await?;
        let total = records.len();

        let joined = try_join_all(records.into_iter().map(|record| async move {
            let employee = self.employees.find_by_id(&record.employee_id).await?;
            Ok::<_, AttendanceError>(employee.map(|employee| (record, employee)))
        }))
        .await?;

        let mut views: Vec<AttendanceView> = joined
            .into_iter()
            .flatten()
            .filter(|(_, employee)| {
                department.map_or(true, |d| employee.department.as_deref() == Some(d))
            })
            .map(|(record, employee)| AttendanceView::join(record, employee))
            .collect();

        views.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.employee_id.cmp(&b.employee_id))
        });

        debug!(%date, total, returned = views.len(), department, "Attendance view built");
        Ok(AttendanceSheet {
            date,
            records: views,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attendance::AttendanceRecord;
    use crate::model::employee::Employee;
    use crate::store::{MemoryStore, UnavailableStore};
    use chrono::NaiveTime;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    fn employee(id: &str, name: &str, department: Option<&str>) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            designation: Some("Operator".to_string()),
            department: department.map(str::to_string),
            picture_url: None,
        }
    }

    async fn seeded(employees: &[Employee], attendance_for: &[&Employee]) -> AttendanceViewBuilder {
        let store = Arc::new(MemoryStore::new());
        for e in employees {
            EmployeeStore::upsert(store.as_ref(), e).await.unwrap();
        }
        for e in attendance_for {
            let mut record = AttendanceRecord::new(day(), e);
            record.entry_time = NaiveTime::from_hms_opt(9, 0, 0);
            AttendanceStore::upsert(store.as_ref(), &record).await.unwrap();
        }
        AttendanceViewBuilder::new(store.clone(), store)
    }

    fn names(sheet: &AttendanceSheet) -> Vec<&str> {
        sheet.records.iter().map(|r| r.name.as_str()).collect()
    }

    #[actix_web::test]
    async fn empty_day_returns_empty_sheet() {
        let builder = seeded(&[], &[]).await;

        let sheet = builder.list_attendance(Some(day()), None).await.unwrap();

        assert_eq!(sheet.date, day());
        assert!(sheet.records.is_empty());
    }

    #[actix_web::test]
    async fn sorted_by_name_regardless_of_insert_order() {
        let carol = employee("EMP-3", "Carol", Some("Paint"));
        let alice = employee("EMP-1", "Alice", Some("Assembly"));
        let bob = employee("EMP-2", "Bob", Some("Assembly"));
        let builder = seeded(
            &[carol.clone(), alice.clone(), bob.clone()],
            &[&carol, &bob, &alice],
        )
        .await;

        let sheet = builder.list_attendance(Some(day()), None).await.unwrap();

        assert_eq!(names(&sheet), vec!["Alice", "Bob", "Carol"]);
        assert_eq!(sheet.records[0].designation.as_deref(), Some("Operator"));
        assert_eq!(sheet.records[0].entry_time, NaiveTime::from_hms_opt(9, 0, 0));
    }

    #[actix_web::test]
    async fn department_filter_is_exact() {
        let alice = employee("EMP-1", "Alice", Some("Assembly"));
        let bob = employee("EMP-2", "Bob", Some("assembly"));
        let carol = employee("EMP-3", "Carol", None);
        let builder = seeded(
            &[alice.clone(), bob.clone(), carol.clone()],
            &[&alice, &bob, &carol],
        )
        .await;

        let sheet = builder
            .list_attendance(Some(day()), Some("Assembly"))
            .await
            .unwrap();

        assert_eq!(names(&sheet), vec!["Alice"]);
    }

    #[actix_web::test]
    async fn orphaned_records_are_dropped() {
        let alice = employee("EMP-1", "Alice", None);
        let ghost = employee("EMP-9", "Ghost", None);
        let builder = seeded(&[alice.clone()], &[&alice, &ghost]).await;

        let sheet = builder.list_attendance(Some(day()), None).await.unwrap();

        assert_eq!(names(&sheet), vec!["Alice"]);
    }

    #[actix_web::test]
    async fn empty_names_sort_first_and_ties_break_on_id() {
        let blank = employee("EMP-5", "", None);
        let sam_b = employee("EMP-B", "Sam", None);
        let sam_a = employee("EMP-A", "Sam", None);
        let builder = seeded(
            &[blank.clone(), sam_b.clone(), sam_a.clone()],
            &[&sam_b, &sam_a, &blank],
        )
        .await;

        let sheet = builder.list_attendance(Some(day()), None).await.unwrap();

        let ids: Vec<&str> = sheet.records.iter().map(|r| r.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["EMP-5", "EMP-A", "EMP-B"]);
    }

    #[actix_web::test]
    async fn defaults_to_today() {
        let builder = seeded(&[], &[]).await;

        let sheet = builder.list_attendance(None, None).await.unwrap();

        assert_eq!(sheet.date, Local::now().date_naive());
    }

    #[actix_web::test]
    async fn employee_lookup_failure_fails_the_whole_listing() {
        let alice = employee("EMP-1", "Alice", Some("Assembly"));
        let store = Arc::new(MemoryStore::new());
        let record = AttendanceRecord::new(day(), &alice);
        AttendanceStore::upsert(store.as_ref(), &record).await.unwrap();
        let builder = AttendanceViewBuilder::new(Arc::new(UnavailableStore), store);

        let err = builder.list_attendance(Some(day()), None).await.unwrap_err();

        assert!(matches!(err, AttendanceError::StoreUnavailable(_)));
    }
}
