// ==========================================
// PM Scheduling Core - Eligibility Checker
// ==========================================
// Decides Due / Overdue / NotDue for one equipment/PM-type pair from the
// maintenance interval and the most recent completion.
// No state, no side effects, no I/O: a pure function of its inputs.
// ==========================================

use crate::config::SchedulingConfig;
use crate::domain::types::{EligibilityStatus, PmType};
use crate::domain::{EligibilityResult, Equipment};
use chrono::NaiveDate;

pub struct EligibilityChecker {
    config: SchedulingConfig,
}

impl EligibilityChecker {
    pub fn new(config: SchedulingConfig) -> Self {
        Self { config }
    }

    /// Evaluate one equipment/PM-type pair as of `reference_date`.
    ///
    /// Rules:
    /// 1. Inactive/Retired equipment is always NotDue, regardless of history.
    /// 2. No completion record at all is Overdue with `days_since_last = None`
    ///    (maximally overdue).
    /// 3. Otherwise, with elapsed = reference_date - last completion:
    ///    - elapsed <  interval                ->  NotDue
    ///    - elapsed <  interval + grace window ->  Due
    ///    - elapsed >= interval + grace window ->  Overdue
    pub fn evaluate(
        &self,
        equipment: &Equipment,
        pm_type: PmType,
        last_completion: Option<NaiveDate>,
        reference_date: NaiveDate,
    ) -> EligibilityResult {
        if !equipment.status.is_schedulable() {
            return EligibilityResult {
                equipment_id: equipment.equipment_id.clone(),
                pm_type,
                status: EligibilityStatus::NotDue,
                days_since_last: last_completion
                    .map(|d| reference_date.signed_duration_since(d).num_days()),
            };
        }

        let Some(last) = last_completion else {
            return EligibilityResult {
                equipment_id: equipment.equipment_id.clone(),
                pm_type,
                status: EligibilityStatus::Overdue,
                days_since_last: None,
            };
        };

        let elapsed = reference_date.signed_duration_since(last).num_days();
        let interval = self.config.interval_days(pm_type);
        let grace = self.config.grace_window_days;

        let status = if elapsed < interval {
            EligibilityStatus::NotDue
        } else if elapsed < interval + grace {
            EligibilityStatus::Due
        } else {
            EligibilityStatus::Overdue
        };

        EligibilityResult {
            equipment_id: equipment.equipment_id.clone(),
            pm_type,
            status,
            days_since_last: Some(elapsed),
        }
    }

    /// Nominal due date for the pair: last completion plus one interval,
    /// clamped forward to `week_start` for overdue and never-completed
    /// equipment (the work cannot be due in the past of this week).
    pub fn due_date(
        &self,
        pm_type: PmType,
        last_completion: Option<NaiveDate>,
        week_start: NaiveDate,
    ) -> NaiveDate {
        match last_completion {
            Some(last) => {
                let nominal = last + chrono::Duration::days(self.config.interval_days(pm_type));
                nominal.max(week_start)
            }
            None => week_start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::OperationalStatus;
    use chrono::Duration;

    fn checker() -> EligibilityChecker {
        EligibilityChecker::new(SchedulingConfig::default())
    }

    fn active_equipment(id: &str) -> Equipment {
        Equipment {
            equipment_id: id.to_string(),
            description: String::new(),
            location: String::new(),
            status: OperationalStatus::Active,
            monthly_pm: true,
            annual_pm: false,
        }
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 10).unwrap()
    }

    #[test]
    fn test_recent_completion_is_not_due() {
        // Last completed 10 days ago, interval 30d.
        let last = reference() - Duration::days(10);
        let result = checker().evaluate(
            &active_equipment("E2"),
            PmType::Monthly,
            Some(last),
            reference(),
        );
        assert_eq!(result.status, EligibilityStatus::NotDue);
        assert_eq!(result.days_since_last, Some(10));
    }

    #[test]
    fn test_within_grace_window_is_due() {
        // 30 <= elapsed < 37 with interval 30d, grace 7d.
        for days in [30, 33, 36] {
            let last = reference() - Duration::days(days);
            let result = checker().evaluate(
                &active_equipment("E3"),
                PmType::Monthly,
                Some(last),
                reference(),
            );
            assert_eq!(result.status, EligibilityStatus::Due, "elapsed={}", days);
        }
    }

    #[test]
    fn test_past_grace_window_is_overdue() {
        // Last completed 40 days ago, interval 30d, grace 7d.
        let last = reference() - Duration::days(40);
        let result = checker().evaluate(
            &active_equipment("E1"),
            PmType::Monthly,
            Some(last),
            reference(),
        );
        assert_eq!(result.status, EligibilityStatus::Overdue);
        assert_eq!(result.days_since_last, Some(40));
    }

    #[test]
    fn test_grace_boundary_is_exact() {
        // elapsed == interval + grace flips to Overdue.
        let last = reference() - Duration::days(37);
        let result = checker().evaluate(
            &active_equipment("E1"),
            PmType::Monthly,
            Some(last),
            reference(),
        );
        assert_eq!(result.status, EligibilityStatus::Overdue);

        // elapsed == interval is the first Due day.
        let last = reference() - Duration::days(30);
        let result = checker().evaluate(
            &active_equipment("E1"),
            PmType::Monthly,
            Some(last),
            reference(),
        );
        assert_eq!(result.status, EligibilityStatus::Due);
    }

    #[test]
    fn test_never_completed_is_overdue() {
        let result =
            checker().evaluate(&active_equipment("E9"), PmType::Annual, None, reference());
        assert_eq!(result.status, EligibilityStatus::Overdue);
        assert_eq!(result.days_since_last, None);
    }

    #[test]
    fn test_inactive_and_retired_are_never_due() {
        for status in [OperationalStatus::Inactive, OperationalStatus::Retired] {
            let mut equipment = active_equipment("E7");
            equipment.status = status;

            // Even with no history at all.
            let result = checker().evaluate(&equipment, PmType::Monthly, None, reference());
            assert_eq!(result.status, EligibilityStatus::NotDue);

            // Even when far past the interval.
            let last = reference() - Duration::days(400);
            let result = checker().evaluate(&equipment, PmType::Monthly, Some(last), reference());
            assert_eq!(result.status, EligibilityStatus::NotDue);
        }
    }

    #[test]
    fn test_annual_interval_applies() {
        let last = reference() - Duration::days(200);
        let mut equipment = active_equipment("E5");
        equipment.monthly_pm = false;
        equipment.annual_pm = true;

        let result = checker().evaluate(&equipment, PmType::Annual, Some(last), reference());
        assert_eq!(result.status, EligibilityStatus::NotDue);

        let last = reference() - Duration::days(365);
        let result = checker().evaluate(&equipment, PmType::Annual, Some(last), reference());
        assert_eq!(result.status, EligibilityStatus::Due);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let last = reference() - Duration::days(40);
        let equipment = active_equipment("E1");
        let first = checker().evaluate(&equipment, PmType::Monthly, Some(last), reference());
        let second = checker().evaluate(&equipment, PmType::Monthly, Some(last), reference());
        assert_eq!(first, second);
    }

    #[test]
    fn test_due_date_computation() {
        let week_start = reference();

        // Overdue: nominal due date is in the past, clamped to week start.
        let last = reference() - Duration::days(40);
        assert_eq!(
            checker().due_date(PmType::Monthly, Some(last), week_start),
            week_start
        );

        // Nominal date still ahead of the week start is kept as-is.
        let last = reference() - Duration::days(25);
        assert_eq!(
            checker().due_date(PmType::Monthly, Some(last), week_start),
            last + Duration::days(30)
        );

        // Never completed: due immediately.
        assert_eq!(
            checker().due_date(PmType::Monthly, None, week_start),
            week_start
        );
    }

    #[test]
    fn test_custom_config_values_apply() {
        let config = SchedulingConfig {
            monthly_interval_days: 14,
            grace_window_days: 2,
            ..SchedulingConfig::default()
        };
        let checker = EligibilityChecker::new(config);

        let last = reference() - Duration::days(15);
        let result = checker.evaluate(
            &active_equipment("E1"),
            PmType::Monthly,
            Some(last),
            reference(),
        );
        assert_eq!(result.status, EligibilityStatus::Due);

        let last = reference() - Duration::days(16);
        let result = checker.evaluate(
            &active_equipment("E1"),
            PmType::Monthly,
            Some(last),
            reference(),
        );
        assert_eq!(result.status, EligibilityStatus::Overdue);
    }
}
