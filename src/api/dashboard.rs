use actix_web::{HttpResponse, Responder, web};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::analytics::{DashboardEngine, MAX_TREND_DAYS, activity, stats, trend};
use crate::error::AppError;
use crate::store::{SharedStore, StoreSnapshot};

#[derive(Debug, Deserialize, IntoParams)]
pub struct TrendQuery {
    /// Number of days ending today, defaults to the configured window
    pub trend_days: Option<u32>,
}

impl TrendQuery {
    fn engine(&self, engine: &DashboardEngine) -> Result<DashboardEngine, AppError> {
        match self.trend_days {
            None => Ok(engine.clone()),
            Some(days) if (1..=MAX_TREND_DAYS).contains(&days) => Ok(engine.with_trend_days(days)),
            Some(_) => Err(AppError::Validation(format!(
                "trend_days must be between 1 and {MAX_TREND_DAYS}"
            ))),
        }
    }
}

/// Copies the store under the read lock and releases it before aggregating.
async fn read_snapshot(store: &SharedStore) -> (StoreSnapshot, NaiveDate) {
    let data = store.read().await.snapshot();
    (data, Local::now().date_naive())
}

/// Full dashboard snapshot
#[utoipa::path(
    get,
    path = "/api/dashboard",
    params(TrendQuery),
    responses(
        (status = 200, description = "All dashboard statistics", body = DashboardSnapshot),
        (status = 400, description = "trend_days out of range")
    ),
    tag = "Dashboard"
)]
pub async fn dashboard(
    store: web::Data<SharedStore>,
    engine: web::Data<DashboardEngine>,
    query: web::Query<TrendQuery>,
) -> actix_web::Result<impl Responder> {
    let engine = query.engine(&engine)?;
    let (data, today) = read_snapshot(&store).await;

    debug!(
        employees = data.employees.len(),
        records = data.attendance.len(),
        %today,
        "Computing dashboard snapshot"
    );
    Ok(HttpResponse::Ok().json(engine.snapshot(&data, today)))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/employees",
    responses((status = 200, description = "Employee statistics", body = EmployeeStats)),
    tag = "Dashboard"
)]
pub async fn employee_stats(store: web::Data<SharedStore>) -> impl Responder {
    let (data, _) = read_snapshot(&store).await;
    HttpResponse::Ok().json(stats::employee_stats(&data.employees))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/attendance",
    responses((status = 200, description = "Today's attendance statistics", body = AttendanceStats)),
    tag = "Dashboard"
)]
pub async fn attendance_stats(store: web::Data<SharedStore>) -> impl Responder {
    let (data, today) = read_snapshot(&store).await;
    HttpResponse::Ok().json(stats::attendance_stats(&data.attendance, today))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/departments",
    responses((status = 200, description = "Per-department attendance today", body = [DepartmentAttendanceStats])),
    tag = "Dashboard"
)]
pub async fn department_stats(store: web::Data<SharedStore>) -> impl Responder {
    let (data, today) = read_snapshot(&store).await;
    HttpResponse::Ok().json(stats::department_attendance_stats(
        &data.employees,
        &data.attendance,
        today,
    ))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/trend",
    params(TrendQuery),
    responses(
        (status = 200, description = "Daily attendance counts, oldest first", body = [AttendanceTrendPoint]),
        (status = 400, description = "trend_days out of range")
    ),
    tag = "Dashboard"
)]
pub async fn attendance_trend(
    store: web::Data<SharedStore>,
    engine: web::Data<DashboardEngine>,
    query: web::Query<TrendQuery>,
) -> actix_web::Result<impl Responder> {
    let engine = query.engine(&engine)?;
    let (data, today) = read_snapshot(&store).await;
    Ok(HttpResponse::Ok().json(trend::attendance_trend(
        &data.attendance,
        today,
        engine.options().trend_days,
    )))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/activity",
    responses((status = 200, description = "Recent activity, newest first", body = [RecentActivity])),
    tag = "Dashboard"
)]
pub async fn recent_activity(
    store: web::Data<SharedStore>,
    engine: web::Data<DashboardEngine>,
) -> impl Responder {
    let (data, _) = read_snapshot(&store).await;
    HttpResponse::Ok().json(activity::recent_activity(
        &data.employees,
        &data.attendance,
        engine.options().activity,
    ))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::Value;

    use crate::routes::test_support::{app_config, seeded_state};

    #[actix_web::test]
    async fn dashboard_over_sample_data() {
        let (store, config) = seeded_state(true);
        let app = test::init_service(App::new().configure(app_config(store, config))).await;

        let req = test::TestRequest::get().uri("/api/dashboard").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["employee_stats"]["total_employees"], 3);
        assert_eq!(body["employee_stats"]["active_employees"], 3);
        assert_eq!(body["employee_stats"]["department_counts"]["Engineering"], 1);
        assert_eq!(body["attendance_stats"]["total_records"], 5);
        assert_eq!(body["attendance_stats"]["present_today"], 1);
        assert_eq!(body["attendance_stats"]["late_today"], 1);

        let departments = body["department_attendance_stats"].as_array().unwrap();
        let names: Vec<_> = departments
            .iter()
            .map(|d| d["department"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Design", "Engineering", "Product"]);
        assert_eq!(departments[1]["attendance_rate"], 100);
        assert_eq!(departments[2]["attendance_rate"], 0);

        let trend = body["attendance_trend"].as_array().unwrap();
        assert_eq!(trend.len(), 7);
        assert_eq!(trend[6]["total"], 2);
        assert_eq!(trend[5]["total"], 3);

        let activity = body["recent_activity"].as_array().unwrap();
        assert!(activity.len() <= 10);
        assert_eq!(activity[0]["kind"], "clock_in");
    }

    #[actix_web::test]
    async fn trend_days_query_is_validated() {
        let (store, config) = seeded_state(false);
        let app = test::init_service(App::new().configure(app_config(store, config))).await;

        let req = test::TestRequest::get()
            .uri("/api/dashboard/trend?trend_days=3")
            .to_request();
        let trend: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(trend.as_array().unwrap().len(), 3);

        let req = test::TestRequest::get()
            .uri("/api/dashboard?trend_days=0")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn empty_store_groups_are_zeroed() {
        let (store, config) = seeded_state(false);
        let app = test::init_service(App::new().configure(app_config(store, config))).await;

        let req = test::TestRequest::get()
            .uri("/api/dashboard/employees")
            .to_request();
        let stats: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stats["total_employees"], 0);

        let req = test::TestRequest::get()
            .uri("/api/dashboard/departments")
            .to_request();
        let departments: Value = test::call_and_read_body_json(&app, req).await;
        assert!(departments.as_array().unwrap().is_empty());

        let req = test::TestRequest::get()
            .uri("/api/dashboard/activity")
            .to_request();
        let activity: Value = test::call_and_read_body_json(&app, req).await;
        assert!(activity.as_array().unwrap().is_empty());
    }
}
