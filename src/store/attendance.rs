use chrono::{NaiveDate, NaiveDateTime, Timelike};

use super::RecordStore;
use crate::error::{AppError, AppResult};
use crate::model::attendance::{
    AttendanceQuery, AttendanceRecord, AttendanceStatus, CreateAttendance, UpdateAttendance,
};

impl RecordStore {
    pub fn list_attendance(&self, query: &AttendanceQuery) -> Vec<AttendanceRecord> {
        self.attendance
            .values()
            .filter(|record| query.matches(record))
            .cloned()
            .collect()
    }

    pub fn attendance_for_employee(&self, employee_id: u64) -> Vec<AttendanceRecord> {
        self.list_attendance(&AttendanceQuery {
            employee_id: Some(employee_id),
            date: None,
        })
    }

    pub fn get_attendance(&self, id: u64) -> Option<&AttendanceRecord> {
        self.attendance.get(&id)
    }

    /// The record for `employee_id` on `date` that has no clock-out yet.
    /// A linear scan; the open-record invariant guarantees at most one hit.
    pub fn open_record(&self, employee_id: u64, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.attendance
            .values()
            .find(|r| r.employee_id == employee_id && r.date == date && r.is_open())
    }

    fn require_employee(&self, employee_id: u64) -> AppResult<()> {
        if self.employees.contains_key(&employee_id) {
            Ok(())
        } else {
            Err(AppError::employee_not_found(employee_id))
        }
    }

    /// Checks a record about to be written. `id` is the record's own id on
    /// update so it does not conflict with itself.
    fn check_record(&self, record: &AttendanceRecord, id: Option<u64>) -> AppResult<()> {
        if let Some(clock_out) = record.clock_out {
            if clock_out < record.clock_in {
                return Err(AppError::Validation(
                    "clock_out must not be earlier than clock_in".into(),
                ));
            }
        }

        if record.is_open() {
            if let Some(open) = self.open_record(record.employee_id, record.date) {
                if Some(open.id) != id {
                    return Err(AppError::Conflict(format!(
                        "Employee {} already has an open attendance record on {}",
                        record.employee_id, record.date
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn create_attendance(&mut self, input: CreateAttendance) -> AppResult<AttendanceRecord> {
        let mut record = AttendanceRecord {
            id: 0,
            employee_id: input.employee_id,
            date: input.date,
            clock_in: input.clock_in,
            clock_out: input.clock_out,
            total_hours: None,
            status: input.status,
        };
        record.refresh_total_hours();
        self.require_employee(record.employee_id)?;
        self.check_record(&record, None)?;

        record.id = self.attendance_ids.next()?;
        self.attendance.insert(record.id, record.clone());
        Ok(record)
    }

    /// `Ok(None)` when no record has this id. The employee reference is only
    /// checked when the patch moves the record to another employee, so records
    /// of deleted employees stay editable.
    pub fn update_attendance(
        &mut self,
        id: u64,
        patch: UpdateAttendance,
    ) -> AppResult<Option<AttendanceRecord>> {
        let Some(existing) = self.attendance.get(&id) else {
            return Ok(None);
        };

        let reassigned = patch
            .employee_id
            .filter(|&employee_id| employee_id != existing.employee_id);
        let mut merged = existing.clone();
        patch.apply_to(&mut merged);
        if let Some(employee_id) = reassigned {
            self.require_employee(employee_id)?;
        }
        self.check_record(&merged, Some(id))?;

        self.attendance.insert(id, merged.clone());
        Ok(Some(merged))
    }

    pub fn delete_attendance(&mut self, id: u64) -> bool {
        self.attendance.remove(&id).is_some()
    }

    /// Opens a session for today. Late when `now` is past the standard start.
    pub fn clock_in(&mut self, employee_id: u64, now: NaiveDateTime) -> AppResult<AttendanceRecord> {
        self.require_employee(employee_id)?;

        let date = now.date();
        if self.open_record(employee_id, date).is_some() {
            return Err(AppError::Conflict("Already clocked in today".into()));
        }

        let clock_in = now.time().with_nanosecond(0).unwrap_or(now.time());
        let status = if clock_in > self.standard_start {
            AttendanceStatus::Late
        } else {
            AttendanceStatus::Present
        };

        self.create_attendance(CreateAttendance {
            employee_id,
            date,
            clock_in,
            clock_out: None,
            status,
        })
    }

    /// Closes today's open session and fills in the total hours.
    pub fn clock_out(&mut self, employee_id: u64, now: NaiveDateTime) -> AppResult<AttendanceRecord> {
        self.require_employee(employee_id)?;

        let date = now.date();
        let id = self
            .open_record(employee_id, date)
            .map(|record| record.id)
            .ok_or_else(|| AppError::Conflict("No active clock-in found for today".into()))?;

        let clock_out = now.time().with_nanosecond(0).unwrap_or(now.time());
        self.update_attendance(
            id,
            UpdateAttendance {
                clock_out: Some(clock_out),
                ..Default::default()
            },
        )?
        .ok_or_else(|| AppError::attendance_not_found(id))
    }
}
