use std::sync::Arc;

use actix_governor::Governor;
use actix_web::middleware::{Condition, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;

mod api;
mod config;
mod db;
mod docs;
mod error;
mod model;
mod routes;
mod service;
mod store;
mod utils;

use api::state::AppState;
use config::{Config, StoreBackend};
use db::init_db;
use store::{MemoryStore, MySqlStore};

use crate::docs::ApiDoc;
use tracing::{info, warn};
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "attendance.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    info!(backend = %config.store_backend, "Server starting...");

    let state = match config.store_backend {
        StoreBackend::Mysql => {
            let pool = init_db(config.database_url()?, config.database_max_connections).await?;
            AppState::from_store(Arc::new(MySqlStore::new(pool)))
        }
        StoreBackend::Memory => {
            warn!("Using in-memory store; attendance is lost on restart");
            AppState::from_store(Arc::new(MemoryStore::new()))
        }
    }
    .with_database_settings(&config);

    let limiter = routes::build_limiter(config.rate_api_per_min)
        .context("RATE_API_PER_MIN produced an invalid rate limit")?;
    let limit_enabled = config.rate_api_per_min > 0;

    let server_addr = config.server_addr.clone();
    let api_prefix = config.api_prefix.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Condition::new(limit_enabled, Governor::new(&limiter)))
            .wrap(routes::cors())
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(Data::new(state.clone()))
            .configure(|cfg| routes::configure(cfg, &api_prefix))
    })
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .run()
    .await?;

    Ok(())
}
