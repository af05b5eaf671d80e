// ==========================================
// PM Scheduling Core - Scheduling Output Entities
// ==========================================
// EligibilityResult and PmAssignment are ephemeral: recomputed on every
// scheduling run from the current catalog and history, never persisted
// by this core.
// ==========================================

use crate::domain::types::{EligibilityStatus, PmType};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of one eligibility evaluation for an equipment/PM-type pair.
///
/// `days_since_last` is `None` when the equipment has no completion record
/// at all; that pair is treated as maximally overdue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub equipment_id: String,
    pub pm_type: PmType,
    pub status: EligibilityStatus,
    pub days_since_last: Option<i64>,
}

/// One generated PM assignment for the scheduling week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PmAssignment {
    pub equipment_id: String,
    pub technician: String,
    pub pm_type: PmType,
    pub due_date: NaiveDate,
    pub week_start: NaiveDate,
    /// ISO-week label of the scheduling week, e.g. "2025-W07".
    pub week_id: String,
    /// Stamped once per generation run; lets downstream adherence counting
    /// group a run's output without this core persisting anything.
    pub schedule_run_id: Uuid,
}

/// ISO-week label for a week-start date, e.g. "2025-W07".
pub fn week_label(week_start: NaiveDate) -> String {
    let iso = week_start.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_label() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
        assert_eq!(week_label(date), "2025-W07");
    }

    #[test]
    fn test_week_label_year_boundary() {
        // 2024-12-30 falls in ISO week 1 of 2025.
        let date = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        assert_eq!(week_label(date), "2025-W01");
    }
}
