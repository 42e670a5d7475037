use std::collections::HashMap;

use chrono::NaiveTime;

use crate::model::attendance::AttendanceRecord;
use crate::model::dashboard::{ActivityKind, RecentActivity};
use crate::model::employee::Employee;

const UNKNOWN_EMPLOYEE: &str = "Unknown Employee";

/// How much of each source feeds the activity list, and how long it may get.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityWindow {
    pub attendance_records: usize,
    pub employees: usize,
    pub limit: usize,
}

impl Default for ActivityWindow {
    fn default() -> Self {
        Self {
            attendance_records: 10,
            employees: 5,
            limit: 10,
        }
    }
}

fn newest<T>(items: &[T], count: usize) -> &[T] {
    items.get(items.len().saturating_sub(count)..).unwrap_or_default()
}

fn activity(
    kind: ActivityKind,
    source_id: u64,
    name: &str,
    description: String,
    timestamp: chrono::NaiveDateTime,
) -> RecentActivity {
    RecentActivity {
        id: format!("{kind}-{source_id}"),
        kind,
        description,
        timestamp,
        employee_name: name.to_string(),
    }
}

/// Merges clock events from the newest attendance records with joins of the
/// newest employees, most recent first.
///
/// Both slices are expected in creation order. Equal timestamps keep the
/// order they were generated in: attendance before joins, clock-in before
/// clock-out.
pub fn recent_activity(
    employees: &[Employee],
    records: &[AttendanceRecord],
    window: ActivityWindow,
) -> Vec<RecentActivity> {
    let names: HashMap<u64, String> = employees
        .iter()
        .map(|employee| (employee.id, employee.display_name()))
        .collect();

    let mut activities = Vec::new();

    for record in newest(records, window.attendance_records) {
        let name = names
            .get(&record.employee_id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_EMPLOYEE);

        activities.push(activity(
            ActivityKind::ClockIn,
            record.id,
            name,
            format!("{name} clocked in"),
            record.date.and_time(record.clock_in),
        ));

        if let Some(clock_out) = record.clock_out {
            activities.push(activity(
                ActivityKind::ClockOut,
                record.id,
                name,
                format!("{name} clocked out"),
                record.date.and_time(clock_out),
            ));
        }
    }

    for employee in newest(employees, window.employees) {
        let name = employee.display_name();
        activities.push(activity(
            ActivityKind::EmployeeAdded,
            employee.id,
            &name,
            format!(
                "{name} joined {} as {}",
                employee.department, employee.position
            ),
            employee.hire_date.and_time(NaiveTime::MIN),
        ));
    }

    // stable, so ties keep generation order
    activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    activities.truncate(window.limit);
    activities
}
