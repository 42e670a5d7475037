use std::collections::HashMap;

use chrono::{Days, NaiveDate};

use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::dashboard::AttendanceTrendPoint;

use super::MAX_TREND_DAYS;

/// Daily counts for the `days` calendar days ending with `today`, oldest
/// first. Days without records are reported as zeros, never skipped.
/// `days` is clamped to `1..=MAX_TREND_DAYS`.
pub fn attendance_trend(
    records: &[AttendanceRecord],
    today: NaiveDate,
    days: u32,
) -> Vec<AttendanceTrendPoint> {
    let days = days.clamp(1, MAX_TREND_DAYS);
    // Only a `today` within a year of the calendar's lower bound can fail here.
    let first = today
        .checked_sub_days(Days::new(u64::from(days - 1)))
        .unwrap_or(NaiveDate::MIN);

    let mut by_date: HashMap<NaiveDate, AttendanceTrendPoint> = first
        .iter_days()
        .take(days as usize)
        .map(|date| {
            let point = AttendanceTrendPoint {
                date,
                present: 0,
                late: 0,
                absent: 0,
                total: 0,
            };
            (date, point)
        })
        .collect();

    for record in records {
        if let Some(point) = by_date.get_mut(&record.date) {
            match record.status {
                AttendanceStatus::Present => point.present += 1,
                AttendanceStatus::Late => point.late += 1,
                AttendanceStatus::Absent => point.absent += 1,
            }
            point.total += 1;
        }
    }

    let mut trend: Vec<_> = by_date.into_values().collect();
    trend.sort_by_key(|point| point.date);
    trend
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::{date, time};

    fn record(id: u64, day: NaiveDate, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: id,
            date: day,
            clock_in: time(9, 0),
            clock_out: None,
            total_hours: None,
            status,
        }
    }

    #[test]
    fn always_has_one_point_per_day_even_when_empty() {
        let today = date(2026, 3, 2);
        let trend = attendance_trend(&[], today, 7);

        assert_eq!(trend.len(), 7);
        assert_eq!(trend.first().unwrap().date, date(2026, 2, 24));
        assert_eq!(trend.last().unwrap().date, today);
        assert!(trend.iter().all(|p| p.total == 0));
    }

    #[test]
    fn three_day_window_with_data_two_days_ago() {
        let today = date(2026, 3, 2);
        let two_days_ago = date(2026, 2, 28);
        let records = vec![
            record(1, two_days_ago, AttendanceStatus::Present),
            record(2, two_days_ago, AttendanceStatus::Late),
            record(3, two_days_ago, AttendanceStatus::Present),
            // outside the window
            record(4, date(2026, 2, 20), AttendanceStatus::Absent),
        ];

        let trend = attendance_trend(&records, today, 3);
        assert_eq!(
            trend,
            vec![
                AttendanceTrendPoint {
                    date: two_days_ago,
                    present: 2,
                    late: 1,
                    absent: 0,
                    total: 3,
                },
                AttendanceTrendPoint {
                    date: date(2026, 3, 1),
                    present: 0,
                    late: 0,
                    absent: 0,
                    total: 0,
                },
                AttendanceTrendPoint {
                    date: today,
                    present: 0,
                    late: 0,
                    absent: 0,
                    total: 0,
                },
            ]
        );
    }

    #[test]
    fn zero_day_window_is_clamped_to_today() {
        let today = date(2026, 3, 2);
        let records = vec![record(1, today, AttendanceStatus::Absent)];
        let trend = attendance_trend(&records, today, 0);
        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].absent, 1);
        assert_eq!(trend[0].total, 1);
    }

    #[test]
    fn oversized_window_is_clamped_to_max() {
        let today = date(2026, 3, 2);
        let trend = attendance_trend(&[], today, u32::MAX);
        assert_eq!(trend.len(), MAX_TREND_DAYS as usize);
        assert_eq!(trend.last().unwrap().date, today);
    }

    #[test]
    fn window_near_calendar_start_keeps_its_length() {
        let trend = attendance_trend(&[], NaiveDate::MIN, 5);
        assert_eq!(trend.len(), 5);
        assert_eq!(trend[0].date, NaiveDate::MIN);
    }
}
