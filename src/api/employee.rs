use actix_web::{HttpResponse, Responder, web};
use tracing::{debug, error, info};

use crate::error::AppError;
use crate::model::employee::{CreateEmployee, EmployeeQuery, UpdateEmployee};
use crate::store::SharedStore;

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created successfully", body = Employee),
        (status = 400, description = "Missing required fields", body = Object, example = json!({
            "message": "first_name must not be empty"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<SharedStore>,
    payload: web::Json<CreateEmployee>,
) -> actix_web::Result<impl Responder> {
    let employee = store
        .write()
        .await
        .create_employee(payload.into_inner())
        .map_err(|e| {
            error!(error = %e, "Failed to create employee");
            e
        })?;

    info!(employee_id = employee.id, department = %employee.department, "Employee created");
    Ok(HttpResponse::Created().json(employee))
}

#[utoipa::path(
    get,
    path = "/api/employees",
    params(EmployeeQuery),
    responses(
        (status = 200, description = "Employee list", body = [Employee])
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    store: web::Data<SharedStore>,
    query: web::Query<EmployeeQuery>,
) -> impl Responder {
    debug!(query = ?query, "Listing employees");
    let employees = store.read().await.list_employees(&query);
    HttpResponse::Ok().json(employees)
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found: 7"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    store: web::Data<SharedStore>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    match store.read().await.get_employee(employee_id) {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Err(AppError::employee_not_found(employee_id).into()),
    }
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated successfully", body = Employee),
        (status = 400, description = "Invalid field value"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found: 7"
        }))
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    store: web::Data<SharedStore>,
    path: web::Path<u64>,
    body: web::Json<UpdateEmployee>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    let updated = store
        .write()
        .await
        .update_employee(employee_id, body.into_inner())
        .map_err(|e| {
            error!(error = %e, employee_id, "Failed to update employee");
            e
        })?;

    match updated {
        Some(employee) => {
            info!(employee_id, "Employee updated");
            Ok(HttpResponse::Ok().json(employee))
        }
        None => Err(AppError::employee_not_found(employee_id).into()),
    }
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found: 7"
        }))
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    store: web::Data<SharedStore>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    if !store.write().await.delete_employee(employee_id) {
        return Err(AppError::employee_not_found(employee_id).into());
    }

    info!(employee_id, "Employee deleted");
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use crate::routes::test_support::{app_config, seeded_state};

    #[actix_web::test]
    async fn create_then_fetch_employee() {
        let (store, config) = seeded_state(false);
        let app = test::init_service(App::new().configure(app_config(store, config))).await;

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@company.com",
                "position": "Analyst",
                "department": "Research",
                "salary": 90000.0,
                "hire_date": "2024-05-01"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["status"], "active");
        let id = created["id"].as_u64().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/api/employees/{id}"))
            .to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched["email"], "ada@company.com");
    }

    #[actix_web::test]
    async fn create_with_blank_name_is_bad_request() {
        let (store, config) = seeded_state(false);
        let app = test::init_service(App::new().configure(app_config(store, config))).await;

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(json!({
                "first_name": "",
                "last_name": "Lovelace",
                "email": "ada@company.com",
                "position": "Analyst",
                "department": "Research",
                "salary": 1.0,
                "hire_date": "2024-05-01"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "first_name must not be empty");
    }

    #[actix_web::test]
    async fn partial_update_and_delete() {
        let (store, config) = seeded_state(true);
        let app = test::init_service(App::new().configure(app_config(store, config))).await;

        let req = test::TestRequest::put()
            .uri("/api/employees/1")
            .set_json(json!({ "status": "inactive" }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["status"], "inactive");
        assert_eq!(updated["first_name"], "John");

        let req = test::TestRequest::delete().uri("/api/employees/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/api/employees/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn list_filters_by_department() {
        let (store, config) = seeded_state(true);
        let app = test::init_service(App::new().configure(app_config(store, config))).await;

        let req = test::TestRequest::get()
            .uri("/api/employees?department=Design")
            .to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        let list = list.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["first_name"], "Mike");
    }
}
