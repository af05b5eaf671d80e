// ==========================================
// PM Scheduling Core - Configuration Manager
// ==========================================
// Storage: config_kv table (key-value, scope_id = 'global').
// Missing keys fall back to the documented defaults; malformed values
// fall back with a warning rather than blocking startup.
// ==========================================

use crate::config::scheduling_config::SchedulingConfig;
use crate::db::open_sqlite_connection;
use rusqlite::{params, Connection};
use std::error::Error;
use std::sync::{Arc, Mutex};

pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// Open a new manager on the given database file.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Build a manager on an already-open connection.
    ///
    /// The unified PRAGMAs are re-applied to the connection (idempotent) so
    /// behavior matches connections opened through `db`.
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let guard = conn
                .lock()
                .map_err(|e| format!("config connection lock poisoned: {}", e))?;
            crate::db::configure_sqlite_connection(&guard)?;
        }
        Ok(Self { conn })
    }

    /// Read a global-scope value, `None` when the key is absent.
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| format!("config connection lock poisoned: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// Parse a numeric key, warning and falling back on malformed text.
    fn get_parsed_or<T>(&self, key: &str, default: T) -> Result<T, Box<dyn Error>>
    where
        T: std::str::FromStr + Copy + std::fmt::Display,
    {
        let raw = match self.get_config_value(key)? {
            Some(v) => v,
            None => return Ok(default),
        };
        match raw.trim().parse::<T>() {
            Ok(v) => Ok(v),
            Err(_) => {
                tracing::warn!(
                    config_key = key,
                    raw_value = %raw,
                    fallback = %default,
                    "malformed config value, using default"
                );
                Ok(default)
            }
        }
    }

    /// Load the scheduling configuration, applying defaults for missing keys.
    ///
    /// The result is not validated here; the scheduling service validates at
    /// construction so deliberately-broken test setups still load.
    pub fn load_scheduling_config(&self) -> Result<SchedulingConfig, Box<dyn Error>> {
        let defaults = SchedulingConfig::default();
        Ok(SchedulingConfig {
            monthly_interval_days: self.get_parsed_or(
                config_keys::MONTHLY_INTERVAL_DAYS,
                defaults.monthly_interval_days,
            )?,
            annual_interval_days: self.get_parsed_or(
                config_keys::ANNUAL_INTERVAL_DAYS,
                defaults.annual_interval_days,
            )?,
            grace_window_days: self
                .get_parsed_or(config_keys::GRACE_WINDOW_DAYS, defaults.grace_window_days)?,
            date_pivot_year: self
                .get_parsed_or(config_keys::DATE_PIVOT_YEAR, defaults.date_pivot_year)?,
            fetch_timeout_ms: self
                .get_parsed_or(config_keys::FETCH_TIMEOUT_MS, defaults.fetch_timeout_ms)?,
        })
    }

    /// Upsert one global-scope key. Intended for admin tooling and tests.
    pub fn set_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| format!("config connection lock poisoned: {}", e))?;
        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        Ok(())
    }
}

// ==========================================
// Configuration key constants
// ==========================================
pub mod config_keys {
    pub const MONTHLY_INTERVAL_DAYS: &str = "pm_monthly_interval_days";
    pub const ANNUAL_INTERVAL_DAYS: &str = "pm_annual_interval_days";
    pub const GRACE_WINDOW_DAYS: &str = "pm_grace_window_days";
    pub const DATE_PIVOT_YEAR: &str = "pm_date_pivot_year";
    pub const FETCH_TIMEOUT_MS: &str = "pm_fetch_timeout_ms";
}
