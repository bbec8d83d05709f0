use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Month in which the academic year rolls over.
pub const DEFAULT_YEAR_START_MONTH: u32 = 9;

/// A closed reporting window in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportingWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ReportingWindow {
    /// Window covering the last `days` days, ending now.
    pub fn last_days(days: i64) -> Self {
        Self::ending_at(Utc::now(), days)
    }

    /// Window covering the `days` days before `end`.
    pub fn ending_at(end: DateTime<Utc>, days: i64) -> Self {
        Self {
            start: end - Duration::days(days),
            end,
        }
    }
}

/// Calendar tunables for academic-year labelling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// Month (1-12) in which a new academic year starts (default: 9)
    #[serde(default = "default_year_start_month")]
    pub year_start_month: u32,
}

fn default_year_start_month() -> u32 {
    DEFAULT_YEAR_START_MONTH
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            year_start_month: DEFAULT_YEAR_START_MONTH,
        }
    }
}

impl CalendarConfig {
    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=12).contains(&self.year_start_month) {
            return Err(format!(
                "year_start_month must be in 1..=12, got {}",
                self.year_start_month
            ));
        }
        Ok(())
    }
}

/// Academic year label ("2024-2025") for a date.
///
/// The year rolls over at `year_start_month`: dates from that month on
/// belong to the year that starts then, earlier dates to the previous one.
pub fn academic_year_for(date: DateTime<Utc>, year_start_month: u32) -> String {
    let year = date.year();
    if date.month() >= year_start_month {
        format!("{}-{}", year, year + 1)
    } else {
        format!("{}-{}", year - 1, year)
    }
}

/// Academic year label for the current instant.
pub fn current_academic_year(config: &CalendarConfig) -> String {
    academic_year_for(Utc::now(), config.year_start_month)
}

/// ISO 8601 week number for a date.
pub fn iso_week_for(date: DateTime<Utc>) -> u32 {
    date.iso_week().week()
}

/// ISO 8601 week number for the current instant.
pub fn current_iso_week() -> u32 {
    iso_week_for(Utc::now())
}
