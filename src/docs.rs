use crate::api::attendance::{ScanEvent, ScanResponse};
use crate::api::employee::{EmployeeListResponse, SeedResponse};
use crate::api::health::StoreStatusResponse;
use crate::model::attendance::{AttendanceRecord, AttendanceView};
use crate::model::employee::Employee;
use crate::service::AttendanceSheet;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Factory Attendance API",
        version = "0.1.0",
        description = r#"
## Factory Attendance

Ingests RFID scans from the factory entry and exit gates and keeps one
attendance record per employee per day.

### Key Features
- **Scan ingestion**
  - `entry` / `exit` gate taps (`scanner1` / `scanner2` accepted)
  - Latest tap per direction wins; worked hours recomputed on every tap
- **Daily attendance**
  - Joined with employee profiles, filterable by department, sorted by name
- **Employee roster**
  - List and idempotent seed by employee id

### Errors
Failures return `{"error": <kind>, "message": <detail>}` where kind is one of
`invalid_input` (400), `not_found` (404) or `store_unavailable` (503).
"#,
    ),
    paths(
        crate::api::attendance::ingest_scan,
        crate::api::attendance::list_attendance,

        crate::api::employee::list_employees,
        crate::api::employee::seed_employees,

        crate::api::health::store_status
    ),
    components(
        schemas(
            ScanEvent,
            ScanResponse,
            AttendanceRecord,
            AttendanceView,
            AttendanceSheet,
            Employee,
            EmployeeListResponse,
            SeedResponse,
            StoreStatusResponse
        )
    ),
    tags(
        (name = "Attendance", description = "Scan ingestion and daily attendance"),
        (name = "Employee", description = "Employee roster"),
        (name = "Status", description = "Service and store status"),
    )
)]
pub struct ApiDoc;
