// ==========================================
// PM Scheduling Core - Equipment Catalog Access
// ==========================================
// Read-only view of the equipment registry. No business logic here:
// rows are validated into typed records and handed up.
// ==========================================

use crate::domain::types::OperationalStatus;
use crate::domain::Equipment;
use crate::repository::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Read-only equipment catalog, fetched once per scheduling run.
#[async_trait]
pub trait EquipmentCatalog: Send + Sync {
    /// All catalog rows. Rows that fail validation are excluded, not fatal.
    async fn list_all(&self) -> RepositoryResult<Vec<Equipment>>;

    async fn find_by_id(&self, equipment_id: &str) -> RepositoryResult<Option<Equipment>>;
}

// ==========================================
// SqliteEquipmentCatalog
// ==========================================

pub struct SqliteEquipmentCatalog {
    conn: Arc<Mutex<Connection>>,
}

/// Row shape before validation.
struct RawEquipmentRow {
    equipment_id: String,
    description: String,
    location: String,
    status: String,
    monthly_pm: bool,
    annual_pm: bool,
}

impl SqliteEquipmentCatalog {
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Validate a raw row into a typed record. Unknown status text is the
    /// only rejection cause; such a row never reaches eligibility logic.
    fn validate_row(raw: RawEquipmentRow) -> RepositoryResult<Equipment> {
        let status = OperationalStatus::parse(&raw.status).ok_or_else(|| {
            RepositoryError::FieldValueError {
                field: "status".to_string(),
                message: format!(
                    "unknown operational status {:?} for equipment {}",
                    raw.status, raw.equipment_id
                ),
            }
        })?;

        Ok(Equipment {
            equipment_id: raw.equipment_id,
            description: raw.description,
            location: raw.location,
            status,
            monthly_pm: raw.monthly_pm,
            annual_pm: raw.annual_pm,
        })
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawEquipmentRow> {
        Ok(RawEquipmentRow {
            equipment_id: row.get(0)?,
            description: row.get(1)?,
            location: row.get(2)?,
            status: row.get(3)?,
            monthly_pm: row.get::<_, i64>(4)? != 0,
            annual_pm: row.get::<_, i64>(5)? != 0,
        })
    }
}

#[async_trait]
impl EquipmentCatalog for SqliteEquipmentCatalog {
    async fn list_all(&self) -> RepositoryResult<Vec<Equipment>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT equipment_id, description, location, status, monthly_pm, annual_pm
            FROM equipment
            ORDER BY equipment_id
            "#,
        )?;

        let raw_rows = stmt
            .query_map([], Self::map_row)?
            .collect::<Result<Vec<_>, _>>()?;
        drop(stmt);
        drop(conn);

        let mut equipment = Vec::with_capacity(raw_rows.len());
        for raw in raw_rows {
            match Self::validate_row(raw) {
                Ok(item) => equipment.push(item),
                Err(e) => {
                    warn!(error = %e, "excluding invalid equipment row from catalog");
                }
            }
        }
        Ok(equipment)
    }

    async fn find_by_id(&self, equipment_id: &str) -> RepositoryResult<Option<Equipment>> {
        let conn = self.get_conn()?;

        let raw = conn
            .query_row(
                r#"
                SELECT equipment_id, description, location, status, monthly_pm, annual_pm
                FROM equipment
                WHERE equipment_id = ?1
                "#,
                params![equipment_id],
                Self::map_row,
            )
            .optional()?;

        match raw {
            Some(raw) => Ok(Some(Self::validate_row(raw)?)),
            None => Ok(None),
        }
    }
}
