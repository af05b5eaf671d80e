// ==========================================
// PM Scheduling Core - SQLite Connection Setup
// ==========================================
// Goals:
// - One place for Connection::open PRAGMA behavior, so no module ends up
//   with foreign keys off while the rest have them on
// - Unified busy_timeout to soften concurrent-access busy errors
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Apply the unified PRAGMAs.
///
/// foreign_keys and busy_timeout are per-connection settings and must be
/// re-applied to every connection.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a SQLite connection with the unified configuration applied.
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Create the tables this crate reads, if absent.
///
/// `equipment` and `pm_completions` are owned by the catalog and the
/// completion ledger respectively; the DDL here exists so fresh
/// deployments and the test suite share one canonical shape.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS equipment (
            equipment_id TEXT PRIMARY KEY,
            description  TEXT NOT NULL DEFAULT '',
            location     TEXT NOT NULL DEFAULT '',
            status       TEXT NOT NULL DEFAULT 'ACTIVE',
            monthly_pm   INTEGER NOT NULL DEFAULT 0,
            annual_pm    INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS pm_completions (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            equipment_id    TEXT NOT NULL,
            technician      TEXT NOT NULL,
            completion_date TEXT NOT NULL,
            pm_type         TEXT NOT NULL,
            labor_hours     INTEGER NOT NULL DEFAULT 0,
            labor_minutes   INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_pm_completions_equipment_type
            ON pm_completions (equipment_id, pm_type);

        CREATE TABLE IF NOT EXISTS config_kv (
            scope_id TEXT NOT NULL,
            key      TEXT NOT NULL,
            value    TEXT NOT NULL,
            PRIMARY KEY (scope_id, key)
        );
        "#,
    )
}
