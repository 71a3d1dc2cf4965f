use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::api::state::AppState;

#[derive(Serialize, ToSchema)]
pub struct StoreStatusResponse {
    #[schema(example = "running")]
    pub backend: String,
    #[schema(example = "connected")]
    pub database: String,
    #[schema(example = "set")]
    pub database_url: String,
    #[schema(example = "set")]
    pub database_name: String,
    #[schema(example = "Connected")]
    pub connection_status: String,
    #[schema(example = json!(["attendance", "employee"]))]
    pub collections: Vec<String>,
}

fn set_or_not(configured: bool) -> String {
    let label = if configured { "set" } else { "not set" };
    label.to_string()
}

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Factory Attendance API running"
    }))
}

/// Backend and store connectivity report. Store failures are reported in the
/// body with a 200 so the probe itself never errors.
#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Connectivity report", body = StoreStatusResponse)
    ),
    tag = "Status"
)]
#[get("/test")]
pub async fn store_status(state: web::Data<AppState>) -> impl Responder {
    let report = match state.status.collections().await {
        Ok(mut collections) => {
            collections.truncate(10);
            StoreStatusResponse {
                backend: "running".to_string(),
                database: "connected".to_string(),
                database_url: set_or_not(state.database_url_set),
                database_name: set_or_not(state.database_name_set),
                connection_status: "Connected".to_string(),
                collections,
            }
        }
        Err(e) => {
            warn!(error = %e, "Store status probe failed");
            let detail: String = e.to_string().chars().take(80).collect();
            StoreStatusResponse {
                backend: "running".to_string(),
                database: format!("error: {}", detail),
                database_url: set_or_not(state.database_url_set),
                database_name: set_or_not(state.database_name_set),
                connection_status: "Not Connected".to_string(),
                collections: Vec::new(),
            }
        }
    };

    HttpResponse::Ok().json(report)
}
