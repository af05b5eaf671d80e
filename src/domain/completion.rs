// ==========================================
// PM Scheduling Core - Completion Record Entity
// ==========================================
// Append-only historical fact from the pm_completions ledger.
// Never mutated once created.
// ==========================================

use crate::domain::types::PmType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One completed preventive-maintenance job.
///
/// `completion_date` is already canonical here: the repository boundary
/// normalizes the heterogeneous stored date text before a record is
/// allowed into scheduling logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub equipment_id: String,
    pub technician: String,
    pub completion_date: NaiveDate,
    pub pm_type: PmType,
    pub labor_hours: i64,
    pub labor_minutes: i64,
}

impl CompletionRecord {
    /// Labor time in fractional hours (hours + minutes/60), the unit the
    /// downstream efficiency reporting consumes.
    pub fn labor_time_hours(&self) -> f64 {
        self.labor_hours as f64 + self.labor_minutes as f64 / 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labor_time_hours() {
        let record = CompletionRecord {
            equipment_id: "PUMP-001".to_string(),
            technician: "T1".to_string(),
            completion_date: NaiveDate::from_ymd_opt(2025, 2, 15).unwrap(),
            pm_type: PmType::Monthly,
            labor_hours: 2,
            labor_minutes: 30,
        };
        assert!((record.labor_time_hours() - 2.5).abs() < f64::EPSILON);
    }
}
