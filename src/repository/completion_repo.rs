// ==========================================
// PM Scheduling Core - Completion History Access
// ==========================================
// The pm_completions ledger is append-only and its completion_date column
// holds heterogeneous date text. Normalization happens here, at the
// boundary: rows whose date matches no accepted pattern are excluded with
// a warning, so one malformed historical record never blocks a run.
// ==========================================

use crate::domain::types::PmType;
use crate::domain::CompletionRecord;
use crate::engine::DateParser;
use crate::repository::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Read-only completion history for one equipment/PM-type pair.
///
/// Results are sorted by completion date descending (most recent first).
/// An empty result is a valid outcome, not an error; only an unreachable
/// store is fatal. No staleness guarantee is made across calls.
#[async_trait]
pub trait CompletionRecordRepository: Send + Sync {
    async fn fetch_completions(
        &self,
        equipment_id: &str,
        pm_type: PmType,
        since: Option<NaiveDate>,
    ) -> RepositoryResult<Vec<CompletionRecord>>;
}

// ==========================================
// SqliteCompletionRepository
// ==========================================

pub struct SqliteCompletionRepository {
    conn: Arc<Mutex<Connection>>,
    parser: DateParser,
}

/// Ledger row before date normalization.
struct RawCompletionRow {
    equipment_id: String,
    technician: String,
    completion_date: String,
    labor_hours: i64,
    labor_minutes: i64,
}

impl SqliteCompletionRepository {
    pub fn from_connection(conn: Arc<Mutex<Connection>>, parser: DateParser) -> Self {
        Self { conn, parser }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

#[async_trait]
impl CompletionRecordRepository for SqliteCompletionRepository {
    async fn fetch_completions(
        &self,
        equipment_id: &str,
        pm_type: PmType,
        since: Option<NaiveDate>,
    ) -> RepositoryResult<Vec<CompletionRecord>> {
        let raw_rows = {
            let conn = self.get_conn()?;

            let mut stmt = conn.prepare(
                r#"
                SELECT equipment_id, technician, completion_date, labor_hours, labor_minutes
                FROM pm_completions
                WHERE equipment_id = ?1 AND pm_type = ?2
                "#,
            )?;

            // The since-filter runs after parsing: heterogeneous date text
            // does not compare correctly inside SQL.
            let rows = stmt
                .query_map(params![equipment_id, pm_type.as_str()], |row| {
                    Ok(RawCompletionRow {
                        equipment_id: row.get(0)?,
                        technician: row.get(1)?,
                        completion_date: row.get(2)?,
                        labor_hours: row.get(3)?,
                        labor_minutes: row.get(4)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            rows
        };

        let mut records = Vec::with_capacity(raw_rows.len());
        for raw in raw_rows {
            let completion_date = match self.parser.parse(&raw.completion_date) {
                Ok(date) => date,
                Err(e) => {
                    warn!(
                        equipment_id = %raw.equipment_id,
                        pm_type = %pm_type,
                        raw_date = %raw.completion_date,
                        error = %e,
                        "excluding completion record with unparseable date"
                    );
                    continue;
                }
            };

            if let Some(cutoff) = since {
                if completion_date < cutoff {
                    continue;
                }
            }

            records.push(CompletionRecord {
                equipment_id: raw.equipment_id,
                technician: raw.technician,
                completion_date,
                pm_type,
                labor_hours: raw.labor_hours,
                labor_minutes: raw.labor_minutes,
            });
        }

        // Most recent first; equal dates keep ledger insertion order.
        records.sort_by(|a, b| b.completion_date.cmp(&a.completion_date));
        Ok(records)
    }
}
