use std::str::FromStr;

use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use crate::{
    api::state::AppState,
    error::AttendanceError,
    model::attendance::{AttendanceRecord, Gate},
    utils::timestamp::{parse_date, parse_timestamp},
};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanEvent {
    #[schema(example = "EMP-001")]
    #[serde(alias = "id")]
    pub employee_id: String,
    /// `entry` or `exit` (`scanner1` / `scanner2` also accepted)
    #[schema(example = "entry")]
    #[serde(alias = "scanner_id")]
    pub gate: String,
    #[schema(example = "2026-01-05T09:00:00", format = "date-time")]
    pub timestamp: String,
}

#[derive(Serialize, ToSchema)]
pub struct ScanResponse {
    #[schema(example = "ok")]
    pub status: String,
    pub data: AttendanceRecord,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AttendanceQuery {
    /// Day to list, `YYYY-MM-DD`; server-local today when omitted
    pub date: Option<String>,
    /// Exact, case-sensitive department name
    pub department: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Ingest an RFID scan
#[utoipa::path(
    post,
    path = "/api/rfid",
    request_body = ScanEvent,
    responses(
        (status = 200, description = "Scan merged into the day's record", body = ScanResponse),
        (status = 400, description = "Unknown gate or malformed timestamp", body = Object, example = json!({
            "error": "invalid_input",
            "message": "Unknown gate 'scanner3'"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "not_found",
            "message": "Employee not found: EMP-404"
        })),
        (status = 503, description = "Store unavailable")
    ),
    tag = "Attendance"
)]
pub async fn ingest_scan(
    state: web::Data<AppState>,
    payload: web::Json<ScanEvent>,
) -> Result<impl Responder, AttendanceError> {
    let event = payload.into_inner();
    debug!(?event, "Scan received");

    let employee_id = event.employee_id.trim();
    if employee_id.is_empty() {
        return Err(AttendanceError::invalid("Employee id must not be empty"));
    }
    let gate = Gate::from_str(event.gate.trim())
        .map_err(|_| AttendanceError::invalid(format!("Unknown gate '{}'", event.gate)))?;
    let timestamp = parse_timestamp(&event.timestamp)?;

    let record = state
        .reconciler
        .reconcile(employee_id, gate, timestamp)
        .await?;

    Ok(HttpResponse::Ok().json(ScanResponse {
        status: "ok".to_string(),
        data: record,
    }))
}

/// List attendance for a day joined with employee info
#[utoipa::path(
    get,
    path = "/api/attendance",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Attendance sorted by employee name", body = crate::service::AttendanceSheet),
        (status = 400, description = "Malformed date"),
        (status = 503, description = "Store unavailable")
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    state: web::Data<AppState>,
    query: web::Query<AttendanceQuery>,
) -> Result<impl Responder, AttendanceError> {
    let date = non_empty(&query.date).map(parse_date).transpose()?;

    let sheet = state
        .view_builder
        .list_attendance(date, non_empty(&query.department))
        .await?;

    Ok(HttpResponse::Ok().json(sheet))
}
