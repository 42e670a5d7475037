use chrono::{Days, NaiveDate, NaiveTime};

use super::RecordStore;
use crate::error::AppResult;
use crate::model::attendance::{AttendanceStatus, CreateAttendance};
use crate::model::employee::{CreateEmployee, EmployeeStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

impl RecordStore {
    /// Demo data: three employees and a few attendance records spread over
    /// `today` and the day before.
    pub fn seed_sample_data(&mut self, today: NaiveDate) -> AppResult<()> {
        let john = self.create_employee(CreateEmployee {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@company.com".into(),
            position: "Software Engineer".into(),
            department: "Engineering".into(),
            salary: 75000.0,
            hire_date: date(2023, 1, 15),
            status: EmployeeStatus::Active,
            phone: Some("+1-555-0123".into()),
            address: Some("123 Main St, Anytown, USA".into()),
        })?;
        let jane = self.create_employee(CreateEmployee {
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            email: "jane.smith@company.com".into(),
            position: "Product Manager".into(),
            department: "Product".into(),
            salary: 85000.0,
            hire_date: date(2022, 11, 1),
            status: EmployeeStatus::Active,
            phone: Some("+1-555-0124".into()),
            address: None,
        })?;
        let mike = self.create_employee(CreateEmployee {
            first_name: "Mike".into(),
            last_name: "Johnson".into(),
            email: "mike.johnson@company.com".into(),
            position: "Designer".into(),
            department: "Design".into(),
            salary: 65000.0,
            hire_date: date(2023, 3, 10),
            status: EmployeeStatus::Active,
            phone: None,
            address: None,
        })?;

        let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);
        let records = [
            (john.id, today, time(9, 0), None, AttendanceStatus::Present),
            (jane.id, today, time(9, 15), None, AttendanceStatus::Late),
            (mike.id, yesterday, time(8, 45), Some(time(17, 30)), AttendanceStatus::Present),
            (john.id, yesterday, time(9, 0), Some(time(18, 0)), AttendanceStatus::Present),
            (jane.id, yesterday, time(9, 30), Some(time(17, 45)), AttendanceStatus::Late),
        ];
        for (employee_id, day, clock_in, clock_out, status) in records {
            self.create_attendance(CreateAttendance {
                employee_id,
                date: day,
                clock_in,
                clock_out,
                status,
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attendance::AttendanceQuery;

    #[test]
    fn seeds_three_employees_and_five_records() {
        let mut store = RecordStore::default();
        let today = date(2026, 3, 2);
        store.seed_sample_data(today).unwrap();

        assert_eq!(store.employee_count(), 3);
        assert_eq!(store.attendance_count(), 5);

        let todays = store.list_attendance(&AttendanceQuery {
            employee_id: None,
            date: Some(today),
        });
        assert_eq!(todays.len(), 2);
        assert!(todays.iter().all(|r| r.is_open()));

        let closed = store.list_attendance(&AttendanceQuery {
            employee_id: None,
            date: Some(date(2026, 3, 1)),
        });
        assert_eq!(closed[0].total_hours, Some(8.75));
    }
}
