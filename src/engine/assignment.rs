// ==========================================
// PM Scheduling Core - Assignment Generator
// ==========================================
// Turns the eligible set into a bounded, balanced weekly assignment list.
// Per-technician counters are local to one generate() call; concurrent
// scheduling runs never share generator state.
// ==========================================

use crate::domain::types::EligibilityStatus;
use crate::domain::{week_label, EligibilityResult, PmAssignment};
use chrono::NaiveDate;
use std::cmp::Ordering;
use tracing::{debug, info};
use uuid::Uuid;

/// One Due/Overdue candidate handed to the generator.
#[derive(Debug, Clone)]
pub struct EligibleItem {
    pub result: EligibilityResult,
    /// Nominal due date computed by the eligibility checker.
    pub due_date: NaiveDate,
}

pub struct AssignmentGenerator {
    // Stateless engine; counters live inside each generate() call.
}

impl AssignmentGenerator {
    pub fn new() -> Self {
        Self {}
    }

    /// Produce at most `max_assignments` assignments for the scheduling week.
    ///
    /// Sort keys, highest priority first:
    /// 1) Overdue before Due
    /// 2) greater days-since-last first (never completed sorts as maximal)
    /// 3) equipment_id ascending
    /// 4) PM type, so dual-type equipment orders deterministically
    ///
    /// Technician choice is least-loaded-first within this run; ties go to
    /// the earlier roster entry. An empty roster yields an empty result:
    /// nothing schedulable, not a failure.
    pub fn generate(
        &self,
        mut eligible: Vec<EligibleItem>,
        roster: &[String],
        week_start: NaiveDate,
        max_assignments: usize,
    ) -> Vec<PmAssignment> {
        if roster.is_empty() {
            debug!("empty technician roster, returning empty schedule");
            return Vec::new();
        }
        if max_assignments == 0 || eligible.is_empty() {
            return Vec::new();
        }

        eligible.sort_by(Self::compare);

        let run_id = Uuid::new_v4();
        let week_id = week_label(week_start);
        let mut loads = vec![0usize; roster.len()];
        let mut assignments = Vec::with_capacity(max_assignments.min(eligible.len()));

        for item in eligible {
            if assignments.len() >= max_assignments {
                break;
            }

            // Least-loaded technician; first roster entry wins ties.
            let slot = loads
                .iter()
                .enumerate()
                .min_by_key(|&(_, count)| *count)
                .map(|(idx, _)| idx)
                .unwrap_or(0);
            loads[slot] += 1;

            assignments.push(PmAssignment {
                equipment_id: item.result.equipment_id,
                technician: roster[slot].clone(),
                pm_type: item.result.pm_type,
                due_date: item.due_date,
                week_start,
                week_id: week_id.clone(),
                schedule_run_id: run_id,
            });
        }

        info!(
            week_id = %week_id,
            assignment_count = assignments.len(),
            roster_size = roster.len(),
            cap = max_assignments,
            "assignment generation complete"
        );

        assignments
    }

    /// Priority comparison; `Less` means `a` schedules first.
    fn compare(a: &EligibleItem, b: &EligibleItem) -> Ordering {
        match Self::compare_status(a.result.status, b.result.status) {
            Ordering::Equal => {}
            other => return other,
        }

        // None (never completed) is maximally overdue.
        let days_a = a.result.days_since_last.unwrap_or(i64::MAX);
        let days_b = b.result.days_since_last.unwrap_or(i64::MAX);
        match days_b.cmp(&days_a) {
            Ordering::Equal => {}
            other => return other,
        }

        match a.result.equipment_id.cmp(&b.result.equipment_id) {
            Ordering::Equal => {}
            other => return other,
        }

        a.result.pm_type.cmp(&b.result.pm_type)
    }

    fn compare_status(a: EligibilityStatus, b: EligibilityStatus) -> Ordering {
        match (a, b) {
            (EligibilityStatus::Overdue, EligibilityStatus::Overdue) => Ordering::Equal,
            (EligibilityStatus::Overdue, _) => Ordering::Less,
            (_, EligibilityStatus::Overdue) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }
}

impl Default for AssignmentGenerator {
    fn default() -> Self {
        Self::new()
    }
}
