use std::env;
use std::str::FromStr;

use anyhow::{Context, Result, ensure};
use chrono::NaiveTime;
use dotenvy::dotenv;

use crate::analytics::{ActivityWindow, DEFAULT_TREND_DAYS, DashboardOptions, MAX_TREND_DAYS};

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,
    pub log_dir: String,

    // Rate limiting
    pub rate_api_per_min: u32,

    // Dashboard
    pub trend_days: u32,
    pub activity_limit: usize,

    /// Clock-ins after this time are recorded as late
    pub standard_start_time: NaiveTime,
    pub seed_sample_data: bool,
}

/// Reads `key`, falling back to `default` when unset.
fn var_or<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse()
        .with_context(|| format!("{key} has an invalid value: {raw:?}"))
}

fn check_trend_days(days: u32) -> Result<u32> {
    ensure!(
        (1..=MAX_TREND_DAYS).contains(&days),
        "TREND_DAYS must be between 1 and {MAX_TREND_DAYS}, got {days}"
    );
    Ok(days)
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string()),
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),

            rate_api_per_min: var_or("RATE_API_PER_MIN", "1000")?,

            trend_days: check_trend_days(var_or(
                "TREND_DAYS",
                &DEFAULT_TREND_DAYS.to_string(),
            )?)?,
            activity_limit: var_or("ACTIVITY_LIMIT", "10")?,

            standard_start_time: var_or("STANDARD_START_TIME", "09:00:00")?,
            seed_sample_data: var_or("SEED_SAMPLE_DATA", "true")?,
        })
    }

    pub fn dashboard_options(&self) -> DashboardOptions {
        DashboardOptions {
            trend_days: self.trend_days,
            activity: ActivityWindow {
                limit: self.activity_limit,
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn var_or_uses_default_when_unset() {
        let days: u32 = var_or("EMPLOYEE_HUB_TEST_UNSET_VAR", "7").unwrap();
        assert_eq!(days, 7);
    }

    #[test]
    fn var_or_reports_bad_defaults() {
        let err = var_or::<u32>("EMPLOYEE_HUB_TEST_UNSET_VAR", "seven").unwrap_err();
        assert!(err.to_string().contains("EMPLOYEE_HUB_TEST_UNSET_VAR"));
    }

    #[test]
    fn parses_standard_start_time() {
        let start: NaiveTime = var_or("EMPLOYEE_HUB_TEST_UNSET_VAR", "08:30:00").unwrap();
        assert_eq!(start, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
    }

    #[test]
    fn trend_days_must_fit_the_engine_window() {
        assert_eq!(check_trend_days(7).unwrap(), 7);
        assert_eq!(check_trend_days(MAX_TREND_DAYS).unwrap(), MAX_TREND_DAYS);
        assert!(check_trend_days(0).is_err());
        let err = check_trend_days(10_000_000).unwrap_err();
        assert!(err.to_string().contains("TREND_DAYS"));
    }
}
