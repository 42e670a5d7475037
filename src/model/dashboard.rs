use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "total_employees": 3,
    "active_employees": 2,
    "inactive_employees": 1,
    "department_counts": { "Engineering": 2, "Product": 1 }
}))]
pub struct EmployeeStats {
    pub total_employees: usize,
    pub active_employees: usize,
    pub inactive_employees: usize,
    pub department_counts: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceStats {
    /// Records across all history
    pub total_records: usize,
    pub present_today: usize,
    pub absent_today: usize,
    pub late_today: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "department": "Engineering",
    "total_employees": 2,
    "present_today": 1,
    "attendance_rate": 50
}))]
pub struct DepartmentAttendanceStats {
    pub department: String,
    pub total_employees: usize,
    pub present_today: usize,
    /// Integer percentage, not clamped
    pub attendance_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceTrendPoint {
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub present: usize,
    pub late: usize,
    pub absent: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActivityKind {
    EmployeeAdded,
    ClockIn,
    ClockOut,
    AttendanceAdded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": "clock_out-4",
    "kind": "clock_out",
    "description": "John Doe clocked out",
    "timestamp": "2026-01-01T18:00:00",
    "employee_name": "John Doe"
}))]
pub struct RecentActivity {
    pub id: String,
    pub kind: ActivityKind,
    pub description: String,
    #[schema(example = "2026-01-01T18:00:00", format = "date-time", value_type = String)]
    pub timestamp: NaiveDateTime,
    pub employee_name: String,
}

/// Everything the dashboard renders, computed from one read of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardSnapshot {
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub today: NaiveDate,
    pub employee_stats: EmployeeStats,
    pub attendance_stats: AttendanceStats,
    pub department_attendance_stats: Vec<DepartmentAttendanceStats>,
    pub attendance_trend: Vec<AttendanceTrendPoint>,
    pub recent_activity: Vec<RecentActivity>,
}
