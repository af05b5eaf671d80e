// ==========================================
// PM Scheduling Core - Schedule Orchestrator
// ==========================================
// The weekly scheduling service: catalog -> eligibility -> generator.
// Stateless between invocations; everything is fetched fresh per call.
// A repository failure (or timeout) aborts the run with no partial
// schedule; retrying is the caller's decision.
// ==========================================

use crate::config::SchedulingConfig;
use crate::domain::types::PmType;
use crate::domain::{Equipment, PmAssignment};
use crate::engine::assignment::{AssignmentGenerator, EligibleItem};
use crate::engine::eligibility::EligibilityChecker;
use crate::error::{ScheduleError, ScheduleResult};
use crate::repository::{CompletionRecordRepository, EquipmentCatalog};
use chrono::NaiveDate;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

pub struct ScheduleOrchestrator<E, C>
where
    E: EquipmentCatalog,
    C: CompletionRecordRepository,
{
    config: SchedulingConfig,
    equipment: Arc<E>,
    completions: Arc<C>,
    checker: EligibilityChecker,
    generator: AssignmentGenerator,
}

impl<E, C> ScheduleOrchestrator<E, C>
where
    E: EquipmentCatalog,
    C: CompletionRecordRepository,
{
    /// Build the service. Configuration is validated here, before any
    /// scheduling attempt.
    pub fn new(
        config: SchedulingConfig,
        equipment: Arc<E>,
        completions: Arc<C>,
    ) -> ScheduleResult<Self> {
        config
            .validate()
            .map_err(ScheduleError::InvalidConfiguration)?;

        Ok(Self {
            checker: EligibilityChecker::new(config.clone()),
            generator: AssignmentGenerator::new(),
            config,
            equipment,
            completions,
        })
    }

    /// Generate the assignment list for one scheduling week.
    ///
    /// For every schedulable catalog item and each of its applicable PM
    /// types, the most recent completion is fetched and eligibility is
    /// evaluated against `week_start`. Due/Overdue pairs go to the
    /// generator together with the roster and cap; its output is returned
    /// unmodified. An empty result is a legitimate business outcome.
    #[instrument(skip(self, roster), fields(week_start = %week_start, roster_size = roster.len()))]
    pub async fn generate_weekly_schedule(
        &self,
        week_start: NaiveDate,
        roster: &[String],
        max_assignments: usize,
    ) -> ScheduleResult<Vec<PmAssignment>> {
        info!(cap = max_assignments, "starting weekly schedule generation");

        let catalog = self.bounded_fetch(self.equipment.list_all()).await?;
        debug!(equipment_count = catalog.len(), "equipment catalog fetched");

        let mut eligible = Vec::new();
        let mut evaluated = 0usize;

        for equipment in &catalog {
            if !equipment.is_schedulable() {
                continue;
            }
            for pm_type in equipment.applicable_types() {
                evaluated += 1;
                if let Some(item) = self
                    .evaluate_pair(equipment, pm_type, week_start)
                    .await?
                {
                    eligible.push(item);
                }
            }
        }

        info!(
            evaluated_pairs = evaluated,
            eligible_count = eligible.len(),
            "eligibility evaluation complete"
        );

        let assignments =
            self.generator
                .generate(eligible, roster, week_start, max_assignments);

        info!(
            assignment_count = assignments.len(),
            "weekly schedule generated"
        );
        Ok(assignments)
    }

    /// Evaluate one equipment/PM-type pair, returning a candidate when it
    /// is Due or Overdue.
    async fn evaluate_pair(
        &self,
        equipment: &Equipment,
        pm_type: PmType,
        week_start: NaiveDate,
    ) -> ScheduleResult<Option<EligibleItem>> {
        let history = self
            .bounded_fetch(self.completions.fetch_completions(
                &equipment.equipment_id,
                pm_type,
                None,
            ))
            .await?;

        // History arrives most-recent-first.
        let last_completion = history.first().map(|r| r.completion_date);

        let result = self
            .checker
            .evaluate(equipment, pm_type, last_completion, week_start);

        debug!(
            equipment_id = %equipment.equipment_id,
            pm_type = %pm_type,
            status = %result.status,
            days_since_last = ?result.days_since_last,
            "eligibility evaluated"
        );

        if !result.status.is_eligible() {
            return Ok(None);
        }

        let due_date = self.checker.due_date(pm_type, last_completion, week_start);
        Ok(Some(EligibleItem { result, due_date }))
    }

    /// Bound a repository fetch by the configured timeout; exceeding it is
    /// indistinguishable from the store being unreachable.
    async fn bounded_fetch<T, F>(&self, fut: F) -> ScheduleResult<T>
    where
        F: Future<Output = crate::repository::RepositoryResult<T>>,
    {
        let limit = Duration::from_millis(self.config.fetch_timeout_ms);
        match tokio::time::timeout(limit, fut).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(ScheduleError::RepositoryUnavailable(format!(
                "repository fetch exceeded {} ms",
                self.config.fetch_timeout_ms
            ))),
        }
    }
}
