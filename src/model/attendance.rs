use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::{IntoParams, ToSchema};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 4,
    "employee_id": 1,
    "date": "2026-01-01",
    "clock_in": "09:00:00",
    "clock_out": "18:00:00",
    "total_hours": 9.0,
    "status": "present"
}))]
pub struct AttendanceRecord {
    pub id: u64,
    pub employee_id: u64,
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "09:00:00", value_type = String)]
    pub clock_in: NaiveTime,
    #[schema(example = "18:00:00", value_type = Option<String>, nullable = true)]
    pub clock_out: Option<NaiveTime>,
    /// Derived from clock-in and clock-out, never set directly
    #[schema(example = 9.0, nullable = true)]
    pub total_hours: Option<f64>,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// A record that has been clocked in but not out yet.
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    pub fn refresh_total_hours(&mut self) {
        self.total_hours = self
            .clock_out
            .map(|clock_out| hours_between(self.date, self.clock_in, clock_out));
    }
}

/// Same-day difference in hours; no overnight handling.
pub fn hours_between(date: NaiveDate, clock_in: NaiveTime, clock_out: NaiveTime) -> f64 {
    let start = date.and_time(clock_in);
    let end = date.and_time(clock_out);
    (end - start).num_seconds() as f64 / 3600.0
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateAttendance {
    #[schema(example = 1)]
    pub employee_id: u64,
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "09:00:00", value_type = String)]
    pub clock_in: NaiveTime,
    #[schema(example = "17:30:00", value_type = Option<String>)]
    pub clock_out: Option<NaiveTime>,
    pub status: AttendanceStatus,
}

/// Partial update; `total_hours` is recomputed after the merge.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateAttendance {
    pub employee_id: Option<u64>,
    #[schema(example = "2026-01-01", format = "date", value_type = Option<String>)]
    pub date: Option<NaiveDate>,
    #[schema(example = "09:00:00", value_type = Option<String>)]
    pub clock_in: Option<NaiveTime>,
    #[schema(example = "17:30:00", value_type = Option<String>)]
    pub clock_out: Option<NaiveTime>,
    pub status: Option<AttendanceStatus>,
}

impl UpdateAttendance {
    pub fn apply_to(self, record: &mut AttendanceRecord) {
        if let Some(v) = self.employee_id {
            record.employee_id = v;
        }
        if let Some(v) = self.date {
            record.date = v;
        }
        if let Some(v) = self.clock_in {
            record.clock_in = v;
        }
        if self.clock_out.is_some() {
            record.clock_out = self.clock_out;
        }
        if let Some(v) = self.status {
            record.status = v;
        }
        record.refresh_total_hours();
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ClockRequest {
    #[schema(example = 1)]
    pub employee_id: Option<u64>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct AttendanceQuery {
    /// Filter by employee ID
    pub employee_id: Option<u64>,
    /// Filter by calendar date
    #[param(value_type = Option<String>, format = "date")]
    pub date: Option<NaiveDate>,
}

impl AttendanceQuery {
    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        self.employee_id.is_none_or(|id| record.employee_id == id)
            && self.date.is_none_or(|date| record.date == date)
    }
}
