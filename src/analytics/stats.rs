use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::dashboard::{AttendanceStats, DepartmentAttendanceStats, EmployeeStats};
use crate::model::employee::{Employee, EmployeeStatus};

pub fn employee_stats(employees: &[Employee]) -> EmployeeStats {
    let mut stats = EmployeeStats {
        total_employees: employees.len(),
        ..Default::default()
    };

    for employee in employees {
        match employee.status {
            EmployeeStatus::Active => stats.active_employees += 1,
            EmployeeStatus::Inactive => stats.inactive_employees += 1,
        }
        *stats
            .department_counts
            .entry(employee.department.clone())
            .or_default() += 1;
    }

    stats
}

/// Totals over all history, status counts over `today` only.
pub fn attendance_stats(records: &[AttendanceRecord], today: NaiveDate) -> AttendanceStats {
    let mut stats = AttendanceStats {
        total_records: records.len(),
        ..Default::default()
    };

    for record in records.iter().filter(|r| r.date == today) {
        match record.status {
            AttendanceStatus::Present => stats.present_today += 1,
            AttendanceStatus::Absent => stats.absent_today += 1,
            AttendanceStatus::Late => stats.late_today += 1,
        }
    }

    stats
}

/// `round(present / total * 100)`, zero for an empty department.
pub fn attendance_rate(present: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((present as f64 / total as f64) * 100.0).round() as u32
}

/// One entry per department label currently in use, ordered by label.
///
/// Only `present` records dated `today` count; duplicate present records
/// for one employee are counted as-is, so the rate may exceed 100.
pub fn department_attendance_stats(
    employees: &[Employee],
    records: &[AttendanceRecord],
    today: NaiveDate,
) -> Vec<DepartmentAttendanceStats> {
    let mut departments: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    let mut department_of: HashMap<u64, &str> = HashMap::with_capacity(employees.len());

    for employee in employees {
        departments.entry(&employee.department).or_default().0 += 1;
        department_of.insert(employee.id, &employee.department);
    }

    let present_today = records
        .iter()
        .filter(|r| r.date == today && r.status == AttendanceStatus::Present);
    for record in present_today {
        if let Some(department) = department_of.get(&record.employee_id) {
            if let Some(counts) = departments.get_mut(department) {
                counts.1 += 1;
            }
        }
    }

    departments
        .into_iter()
        .map(|(department, (total, present))| DepartmentAttendanceStats {
            department: department.to_string(),
            total_employees: total,
            present_today: present,
            attendance_rate: attendance_rate(present, total),
        })
        .collect()
}
