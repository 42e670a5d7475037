use actix_web::{HttpResponse, Responder, web};
use chrono::{Local, NaiveDateTime};
use tracing::{debug, error, info, warn};

use crate::error::AppError;
use crate::model::attendance::{AttendanceQuery, ClockRequest, CreateAttendance, UpdateAttendance};
use crate::store::SharedStore;

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn required_employee_id(body: &ClockRequest) -> Result<u64, AppError> {
    body.employee_id
        .ok_or_else(|| AppError::Validation("employee_id is required".into()))
}

/// Clock-in endpoint
#[utoipa::path(
    post,
    path = "/api/attendance/clock-in",
    request_body = ClockRequest,
    responses(
        (status = 201, description = "Clocked in successfully", body = AttendanceRecord),
        (status = 400, description = "employee_id missing", body = Object, example = json!({
            "message": "employee_id is required"
        })),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Already clocked in today", body = Object, example = json!({
            "message": "Already clocked in today"
        }))
    ),
    tag = "Attendance"
)]
pub async fn clock_in(
    store: web::Data<SharedStore>,
    body: web::Json<ClockRequest>,
) -> actix_web::Result<impl Responder> {
    let employee_id = required_employee_id(&body)?;

    let record = store
        .write()
        .await
        .clock_in(employee_id, now())
        .map_err(|e| {
            warn!(error = %e, employee_id, "Clock-in rejected");
            e
        })?;

    info!(employee_id, record_id = record.id, status = %record.status, "Clocked in");
    Ok(HttpResponse::Created().json(record))
}

/// Clock-out endpoint
#[utoipa::path(
    post,
    path = "/api/attendance/clock-out",
    request_body = ClockRequest,
    responses(
        (status = 200, description = "Clocked out successfully", body = AttendanceRecord),
        (status = 400, description = "employee_id missing"),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "No active clock-in found for today", body = Object, example = json!({
            "message": "No active clock-in found for today"
        }))
    ),
    tag = "Attendance"
)]
pub async fn clock_out(
    store: web::Data<SharedStore>,
    body: web::Json<ClockRequest>,
) -> actix_web::Result<impl Responder> {
    let employee_id = required_employee_id(&body)?;

    let record = store
        .write()
        .await
        .clock_out(employee_id, now())
        .map_err(|e| {
            warn!(error = %e, employee_id, "Clock-out rejected");
            e
        })?;

    info!(employee_id, record_id = record.id, total_hours = ?record.total_hours, "Clocked out");
    Ok(HttpResponse::Ok().json(record))
}

#[utoipa::path(
    get,
    path = "/api/attendance",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Attendance records", body = [AttendanceRecord])
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    store: web::Data<SharedStore>,
    query: web::Query<AttendanceQuery>,
) -> impl Responder {
    debug!(query = ?query, "Listing attendance");
    let records = store.read().await.list_attendance(&query);
    HttpResponse::Ok().json(records)
}

#[utoipa::path(
    get,
    path = "/api/attendance/employee/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Attendance records of one employee", body = [AttendanceRecord])
    ),
    tag = "Attendance"
)]
pub async fn employee_attendance(
    store: web::Data<SharedStore>,
    path: web::Path<u64>,
) -> impl Responder {
    let records = store.read().await.attendance_for_employee(path.into_inner());
    HttpResponse::Ok().json(records)
}

#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = CreateAttendance,
    responses(
        (status = 201, description = "Attendance record created", body = AttendanceRecord),
        (status = 400, description = "Invalid clock times"),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Employee already has an open record that day")
    ),
    tag = "Attendance"
)]
pub async fn create_attendance(
    store: web::Data<SharedStore>,
    payload: web::Json<CreateAttendance>,
) -> actix_web::Result<impl Responder> {
    let record = store
        .write()
        .await
        .create_attendance(payload.into_inner())
        .map_err(|e| {
            error!(error = %e, "Failed to create attendance record");
            e
        })?;

    info!(record_id = record.id, employee_id = record.employee_id, "Attendance record created");
    Ok(HttpResponse::Created().json(record))
}

#[utoipa::path(
    get,
    path = "/api/attendance/{record_id}",
    params(
        ("record_id", Path, description = "Attendance record ID")
    ),
    responses(
        (status = 200, description = "Attendance record found", body = AttendanceRecord),
        (status = 404, description = "Attendance record not found")
    ),
    tag = "Attendance"
)]
pub async fn get_attendance(
    store: web::Data<SharedStore>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let record_id = path.into_inner();

    match store.read().await.get_attendance(record_id) {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Err(AppError::attendance_not_found(record_id).into()),
    }
}

#[utoipa::path(
    put,
    path = "/api/attendance/{record_id}",
    params(
        ("record_id", Path, description = "Attendance record ID")
    ),
    request_body = UpdateAttendance,
    responses(
        (status = 200, description = "Attendance record updated", body = AttendanceRecord),
        (status = 400, description = "Invalid clock times"),
        (status = 404, description = "Attendance record or employee not found"),
        (status = 409, description = "Update would open a second session that day")
    ),
    tag = "Attendance"
)]
pub async fn update_attendance(
    store: web::Data<SharedStore>,
    path: web::Path<u64>,
    body: web::Json<UpdateAttendance>,
) -> actix_web::Result<impl Responder> {
    let record_id = path.into_inner();

    let updated = store
        .write()
        .await
        .update_attendance(record_id, body.into_inner())
        .map_err(|e| {
            error!(error = %e, record_id, "Failed to update attendance record");
            e
        })?;

    match updated {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Err(AppError::attendance_not_found(record_id).into()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/attendance/{record_id}",
    params(
        ("record_id", Path, description = "Attendance record ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted"),
        (status = 404, description = "Attendance record not found")
    ),
    tag = "Attendance"
)]
pub async fn delete_attendance(
    store: web::Data<SharedStore>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let record_id = path.into_inner();

    if !store.write().await.delete_attendance(record_id) {
        return Err(AppError::attendance_not_found(record_id).into());
    }

    info!(record_id, "Attendance record deleted");
    Ok(HttpResponse::NoContent().finish())
}
