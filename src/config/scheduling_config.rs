// ==========================================
// PM Scheduling Core - Scheduling Configuration
// ==========================================
// Interval, grace-window and pivot values are deployment tuning, never
// literals inside engine logic. Engines receive a validated copy at
// construction time.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::PmType;

/// Recognized scheduling options.
///
/// Defaults match the deployed system: Monthly every 30 days, Annual every
/// 365 days, a 7-day grace window before Due escalates to Overdue, and a
/// two-digit-year pivot of 50 (>= 50 resolves to the 1900s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingConfig {
    pub monthly_interval_days: i64,
    pub annual_interval_days: i64,
    pub grace_window_days: i64,
    pub date_pivot_year: i32,
    /// Upper bound on one repository fetch; exceeding it is treated the
    /// same as the store being unreachable.
    pub fetch_timeout_ms: u64,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            monthly_interval_days: 30,
            annual_interval_days: 365,
            grace_window_days: 7,
            date_pivot_year: 50,
            fetch_timeout_ms: 5_000,
        }
    }
}

impl SchedulingConfig {
    /// Recurring interval for a PM type, in days.
    pub fn interval_days(&self, pm_type: PmType) -> i64 {
        match pm_type {
            PmType::Monthly => self.monthly_interval_days,
            PmType::Annual => self.annual_interval_days,
        }
    }

    /// Validate option values. Called fail-fast at service construction,
    /// before any scheduling attempt.
    pub fn validate(&self) -> Result<(), String> {
        if self.monthly_interval_days <= 0 {
            return Err(format!(
                "monthly_interval_days must be positive, got {}",
                self.monthly_interval_days
            ));
        }
        if self.annual_interval_days <= 0 {
            return Err(format!(
                "annual_interval_days must be positive, got {}",
                self.annual_interval_days
            ));
        }
        if self.grace_window_days < 0 {
            return Err(format!(
                "grace_window_days must not be negative, got {}",
                self.grace_window_days
            ));
        }
        if !(0..=99).contains(&self.date_pivot_year) {
            return Err(format!(
                "date_pivot_year must be in 0..=99, got {}",
                self.date_pivot_year
            ));
        }
        if self.fetch_timeout_ms == 0 {
            return Err("fetch_timeout_ms must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SchedulingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_interval_days_per_type() {
        let config = SchedulingConfig::default();
        assert_eq!(config.interval_days(PmType::Monthly), 30);
        assert_eq!(config.interval_days(PmType::Annual), 365);
    }

    #[test]
    fn test_validate_rejects_non_positive_interval() {
        let config = SchedulingConfig {
            monthly_interval_days: 0,
            ..SchedulingConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("monthly_interval_days"));

        let config = SchedulingConfig {
            annual_interval_days: -365,
            ..SchedulingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_pivot() {
        let config = SchedulingConfig {
            date_pivot_year: 100,
            ..SchedulingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_allows_zero_grace_window() {
        let config = SchedulingConfig {
            grace_window_days: 0,
            ..SchedulingConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
