use crate::model::attendance::{
    AttendanceRecord, AttendanceStatus, ClockRequest, CreateAttendance, UpdateAttendance,
};
use crate::model::dashboard::{
    ActivityKind, AttendanceStats, AttendanceTrendPoint, DashboardSnapshot,
    DepartmentAttendanceStats, EmployeeStats, RecentActivity,
};
use crate::model::employee::{CreateEmployee, Employee, EmployeeStatus, UpdateEmployee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Hub API",
        version = "1.0.0",
        description = r#"
## Employee Hub

Employee directory and attendance tracking backed by in-memory storage.

### 🔹 Key Features
- **Employee Management**
  - Create, update, list, and view employee profiles
- **Attendance Management**
  - Clock-in / clock-out and manual attendance records
- **Dashboard**
  - Employee and attendance statistics, per-department attendance rates,
    a multi-day attendance trend and a recent activity feed

### 📦 Response Format
- JSON-based RESTful responses
- Errors are returned as `{"message": "..."}`

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::health::health,

        crate::api::attendance::clock_in,
        crate::api::attendance::clock_out,
        crate::api::attendance::list_attendance,
        crate::api::attendance::employee_attendance,
        crate::api::attendance::create_attendance,
        crate::api::attendance::get_attendance,
        crate::api::attendance::update_attendance,
        crate::api::attendance::delete_attendance,

        crate::api::employee::create_employee,
        crate::api::employee::get_employee,
        crate::api::employee::list_employees,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::dashboard::dashboard,
        crate::api::dashboard::employee_stats,
        crate::api::dashboard::attendance_stats,
        crate::api::dashboard::department_stats,
        crate::api::dashboard::attendance_trend,
        crate::api::dashboard::recent_activity
    ),
    components(
        schemas(
            Employee,
            EmployeeStatus,
            CreateEmployee,
            UpdateEmployee,
            AttendanceRecord,
            AttendanceStatus,
            CreateAttendance,
            UpdateAttendance,
            ClockRequest,
            DashboardSnapshot,
            EmployeeStats,
            AttendanceStats,
            DepartmentAttendanceStats,
            AttendanceTrendPoint,
            RecentActivity,
            ActivityKind
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Dashboard", description = "Aggregated dashboard statistics"),
        (name = "Health", description = "Liveness check"),
    )
)]
pub struct ApiDoc;
