use crate::{
    api::{attendance, dashboard, employee, health},
    config::Config,
    error::AppError,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{Scope, web};

// Helper to build the per-scope limiter
fn build_limiter(requests_per_min: u32) -> Option<Governor<PeerIpKeyExtractor, NoOpMiddleware>> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        60_000 / requests_per_min as u64
    };
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms.max(1))
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()?;
    Some(Governor::new(&cfg))
}

/// Malformed JSON bodies become a 400 with the usual `{"message": ..}` body.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

/// Same for path segments that do not parse, e.g. `/employees/abc`.
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

/// Every API route, mounted under `prefix`.
pub fn api_scope(prefix: &str) -> Scope {
    web::scope(prefix)
        .app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .service(web::resource("/health").route(web::get().to(health::health)))
        .service(
            web::scope("/employees")
                // /employees
                .service(
                    web::resource("")
                        .route(web::post().to(employee::create_employee))
                        .route(web::get().to(employee::list_employees)),
                )
                // /employees/{id}
                .service(
                    web::resource("/{id}")
                        .route(web::put().to(employee::update_employee))
                        .route(web::get().to(employee::get_employee))
                        .route(web::delete().to(employee::delete_employee)),
                ),
        )
        .service(
            web::scope("/attendance")
                // /attendance
                .service(
                    web::resource("")
                        .route(web::get().to(attendance::list_attendance))
                        .route(web::post().to(attendance::create_attendance)),
                )
                .service(
                    web::resource("/clock-in").route(web::post().to(attendance::clock_in)),
                )
                .service(
                    web::resource("/clock-out").route(web::post().to(attendance::clock_out)),
                )
                // /attendance/employee/{employee_id}
                .service(
                    web::resource("/employee/{employee_id}")
                        .route(web::get().to(attendance::employee_attendance)),
                )
                // /attendance/{id}
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(attendance::get_attendance))
                        .route(web::put().to(attendance::update_attendance))
                        .route(web::delete().to(attendance::delete_attendance)),
                ),
        )
        .service(
            web::scope("/dashboard")
                .service(web::resource("").route(web::get().to(dashboard::dashboard)))
                .service(web::resource("/employees").route(web::get().to(dashboard::employee_stats)))
                .service(
                    web::resource("/attendance").route(web::get().to(dashboard::attendance_stats)),
                )
                .service(
                    web::resource("/departments").route(web::get().to(dashboard::department_stats)),
                )
                .service(web::resource("/trend").route(web::get().to(dashboard::attendance_trend)))
                .service(
                    web::resource("/activity").route(web::get().to(dashboard::recent_activity)),
                ),
        )
}

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    match build_limiter(config.rate_api_per_min) {
        Some(limiter) => {
            cfg.service(api_scope(&config.api_prefix).wrap(limiter));
        }
        None => {
            tracing::warn!(
                rate = config.rate_api_per_min,
                "Invalid rate limit settings, serving API without a limiter"
            );
            cfg.service(api_scope(&config.api_prefix));
        }
    }
}
