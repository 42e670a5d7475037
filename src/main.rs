use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use chrono::Local;

mod analytics;
mod api;
mod config;
mod docs;
mod error;
mod model;
mod routes;
mod store;

use analytics::DashboardEngine;
use config::Config;
use store::{RecordStore, SharedStore};

use crate::docs::ApiDoc;
use tracing::{error, info};
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::from_env().map_err(|e| {
        eprintln!("Invalid configuration: {e:#}");
        std::io::Error::other(e.to_string())
    })?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(addr = %config.server_addr, prefix = %config.api_prefix, "Server starting...");

    let mut store = RecordStore::new(config.standard_start_time);
    if config.seed_sample_data {
        if let Err(e) = store.seed_sample_data(Local::now().date_naive()) {
            error!(error = %e, "Failed to seed sample data");
        } else {
            info!(
                employees = store.employee_count(),
                records = store.attendance_count(),
                "Sample data loaded"
            );
        }
    }

    let store = Data::new(SharedStore::new(store));
    let engine = Data::new(DashboardEngine::new(config.dashboard_options()));
    let server_addr = config.server_addr.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(store.clone())
            .app_data(engine.clone())
            .configure(|cfg| routes::configure(cfg, config.clone()))
    })
    .bind(server_addr)?
    .run()
    .await
}
