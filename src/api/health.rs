use actix_web::{HttpResponse, Responder};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = Object, example = json!({
            "status": "OK",
            "message": "Employee Hub API is running"
        }))
    ),
    tag = "Health"
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "message": "Employee Hub API is running"
    }))
}
