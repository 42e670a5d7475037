//! Dashboard aggregation.
//!
//! Everything here is a pure function of a [`StoreSnapshot`] and the
//! caller's notion of "today"; nothing mutates the store and nothing fails.
//! Empty input yields zero counts and empty lists.

pub mod activity;
pub mod stats;
pub mod trend;

use chrono::NaiveDate;

use crate::model::dashboard::DashboardSnapshot;
use crate::store::StoreSnapshot;

pub use activity::ActivityWindow;

pub const DEFAULT_TREND_DAYS: u32 = 7;
/// Widest trend window the engine will compute.
pub const MAX_TREND_DAYS: u32 = 366;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardOptions {
    pub trend_days: u32,
    pub activity: ActivityWindow,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            trend_days: DEFAULT_TREND_DAYS,
            activity: ActivityWindow::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DashboardEngine {
    options: DashboardOptions,
}

impl DashboardEngine {
    pub fn new(options: DashboardOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> DashboardOptions {
        self.options
    }

    /// Same engine with a different trend window.
    pub fn with_trend_days(&self, trend_days: u32) -> Self {
        Self {
            options: DashboardOptions {
                trend_days,
                ..self.options
            },
        }
    }

    pub fn snapshot(&self, data: &StoreSnapshot, today: NaiveDate) -> DashboardSnapshot {
        DashboardSnapshot {
            today,
            employee_stats: stats::employee_stats(&data.employees),
            attendance_stats: stats::attendance_stats(&data.attendance, today),
            department_attendance_stats: stats::department_attendance_stats(
                &data.employees,
                &data.attendance,
                today,
            ),
            attendance_trend: trend::attendance_trend(
                &data.attendance,
                today,
                self.options.trend_days,
            ),
            recent_activity: activity::recent_activity(
                &data.employees,
                &data.attendance,
                self.options.activity,
            ),
        }
    }
}
