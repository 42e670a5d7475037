//! In-memory record store.
//!
//! One owner for both collections: employees and attendance records, each
//! keyed by a `u64` drawn from its own monotonic sequence. `BTreeMap` keeps
//! iteration in creation order, which the activity feed relies on when it
//! takes "the most recent N" of either collection.
//!
//! The store itself is synchronous; the HTTP layer shares it behind a
//! `tokio::sync::RwLock` (see [`SharedStore`]) so writes are serialized and
//! dashboard reads see a coherent copy.

mod attendance;
mod employee;
mod seed;

use std::collections::BTreeMap;

use chrono::NaiveTime;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::model::{attendance::AttendanceRecord, employee::Employee};

pub type SharedStore = RwLock<RecordStore>;

/// Hands out identifiers that are never reused for the lifetime of the store.
#[derive(Debug, Default)]
struct IdSequence {
    last: u64,
}

impl IdSequence {
    fn next(&mut self) -> AppResult<u64> {
        let id = self
            .last
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("identifier space exhausted".into()))?;
        self.last = id;
        Ok(id)
    }
}

#[derive(Debug)]
pub struct RecordStore {
    employees: BTreeMap<u64, Employee>,
    attendance: BTreeMap<u64, AttendanceRecord>,
    employee_ids: IdSequence,
    attendance_ids: IdSequence,
    /// Clock-ins after this time of day are recorded as late
    standard_start: NaiveTime,
}

/// Point-in-time copy of both collections, in creation order.
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    pub employees: Vec<Employee>,
    pub attendance: Vec<AttendanceRecord>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(default_standard_start())
    }
}

pub fn default_standard_start() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default()
}

impl RecordStore {
    pub fn new(standard_start: NaiveTime) -> Self {
        Self {
            employees: BTreeMap::new(),
            attendance: BTreeMap::new(),
            employee_ids: IdSequence::default(),
            attendance_ids: IdSequence::default(),
            standard_start,
        }
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            employees: self.employees.values().cloned().collect(),
            attendance: self.attendance.values().cloned().collect(),
        }
    }

    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    pub fn attendance_count(&self) -> usize {
        self.attendance.len()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_sequence_is_monotonic() {
        let mut ids = IdSequence::default();
        assert_eq!(ids.next().unwrap(), 1);
        assert_eq!(ids.next().unwrap(), 2);
    }

    #[test]
    fn id_sequence_reports_exhaustion() {
        let mut ids = IdSequence { last: u64::MAX };
        assert!(matches!(ids.next(), Err(AppError::Internal(_))));
    }

    #[test]
    fn empty_store_snapshot_is_empty() {
        let store = RecordStore::default();
        let snapshot = store.snapshot();
        assert!(snapshot.employees.is_empty());
        assert!(snapshot.attendance.is_empty());
        assert_eq!(store.standard_start, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    }
}
