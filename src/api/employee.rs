use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    api::state::AppState, error::AttendanceError, model::employee::Employee,
    service::SeedReport,
};

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    #[schema(example = 1)]
    pub count: usize,
    #[schema(
    example = json!([{
        "id": "EMP-001",
        "name": "John Doe",
        "designation": "Machine Operator",
        "department": "Assembly",
        "picture_url": null
    }])
)]
    pub employees: Vec<Employee>,
}

#[derive(Serialize, ToSchema)]
pub struct SeedResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = 3)]
    pub inserted: usize,
    #[schema(example = 1)]
    pub updated: usize,
}

impl From<SeedReport> for SeedResponse {
    fn from(report: SeedReport) -> Self {
        Self {
            status: "ok".to_string(),
            inserted: report.inserted,
            updated: report.updated,
        }
    }
}

/// List all employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = EmployeeListResponse),
        (status = 503, description = "Store unavailable")
    ),
    tag = "Employee"
)]
pub async fn list_employees(state: web::Data<AppState>) -> Result<impl Responder, AttendanceError> {
    let employees = state.directory.list_employees().await?;

    Ok(HttpResponse::Ok().json(EmployeeListResponse {
        count: employees.len(),
        employees,
    }))
}

/// Seed the employee table, upserting by id
#[utoipa::path(
    post,
    path = "/api/employees/seed",
    request_body = Vec<Employee>,
    responses(
        (status = 200, description = "Employees inserted or updated", body = SeedResponse),
        (status = 400, description = "Malformed employee record", body = Object, example = json!({
            "error": "invalid_input",
            "message": "Employee at index 0 has an empty id"
        })),
        (status = 503, description = "Store unavailable")
    ),
    tag = "Employee"
)]
pub async fn seed_employees(
    state: web::Data<AppState>,
    payload: web::Json<Vec<Employee>>,
) -> Result<impl Responder, AttendanceError> {
    let report = state.directory.seed_employees(&payload).await?;

    Ok(HttpResponse::Ok().json(SeedResponse::from(report)))
}
