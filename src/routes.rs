use crate::{
    api::{attendance, employee, health},
    error::AttendanceError,
};
use actix_governor::{
    GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_cors::Cors;
use actix_web::web;

/// Seed batches can be a whole plant roster.
const JSON_LIMIT_BYTES: usize = 1 << 20;

/// Per-IP limiter allowing `requests_per_min` with an equal burst.
pub fn build_limiter(
    requests_per_min: u32,
) -> Option<GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>> {
    let requests_per_min = requests_per_min.max(1);
    GovernorConfigBuilder::default()
        .milliseconds_per_request((60_000 / requests_per_min as u64).max(1))
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
}

/// Allows any origin, method and header, with credentials.
pub fn cors() -> Cors {
    Cors::permissive()
}

pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str) {
    // Body and query decode failures share the InvalidInput error shape
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_LIMIT_BYTES)
            .error_handler(|err, _| AttendanceError::invalid(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _| AttendanceError::invalid(err.to_string()).into()),
    );

    cfg.service(health::index).service(health::store_status);

    cfg.service(
        web::scope(api_prefix)
            // /rfid
            .service(web::resource("/rfid").route(web::post().to(attendance::ingest_scan)))
            // /attendance?date=&department=
            .service(
                web::resource("/attendance").route(web::get().to(attendance::list_attendance)),
            )
            .service(
                web::scope("/employees")
                    // /employees
                    .service(web::resource("").route(web::get().to(employee::list_employees)))
                    // /employees/seed
                    .service(
                        web::resource("/seed").route(web::post().to(employee::seed_employees)),
                    ),
            ),
    );
}
