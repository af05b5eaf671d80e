// Generate the weekly PM schedule from a maintenance database and print it
// as JSON, one run per invocation.
//
// Usage:
//   pm-scheduler [db_path] [week_start YYYY-MM-DD] [max_assignments] [tech1,tech2,...]
//
// Defaults: database under the user data directory, week starting today,
// cap 20, empty roster (which yields an empty schedule).

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use pm_scheduler::db::{init_schema, open_sqlite_connection};
use pm_scheduler::{
    ConfigManager, DateParser, ScheduleOrchestrator, SqliteCompletionRepository,
    SqliteEquipmentCatalog,
};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

fn default_db_path() -> String {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("pm-scheduler");
    path.push("maintenance.db");
    path.to_string_lossy().to_string()
}

#[tokio::main]
async fn main() -> Result<()> {
    pm_scheduler::logging::init();

    let mut args = std::env::args().skip(1);
    let db_path = args.next().unwrap_or_else(default_db_path);
    let week_start = match args.next() {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("week_start {:?} is not YYYY-MM-DD", raw))?,
        None => Utc::now().date_naive(),
    };
    let max_assignments: usize = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("max_assignments {:?} is not a positive integer", raw))?,
        None => 20,
    };
    let roster: Vec<String> = args
        .next()
        .map(|raw| {
            raw.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default();

    tracing::info!(version = pm_scheduler::VERSION, db_path = %db_path, "starting");

    if let Some(parent) = PathBuf::from(&db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let conn = open_sqlite_connection(&db_path)
        .with_context(|| format!("cannot open database {}", db_path))?;
    init_schema(&conn)?;
    let conn = Arc::new(Mutex::new(conn));

    let config = ConfigManager::from_connection(conn.clone())
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .load_scheduling_config()
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let parser = DateParser::new(config.date_pivot_year);
    let equipment = Arc::new(SqliteEquipmentCatalog::from_connection(conn.clone()));
    let completions = Arc::new(SqliteCompletionRepository::from_connection(conn, parser));

    let orchestrator = ScheduleOrchestrator::new(config, equipment, completions)?;
    let schedule = orchestrator
        .generate_weekly_schedule(week_start, &roster, max_assignments)
        .await?;

    println!("{}", serde_json::to_string_pretty(&schedule)?);
    Ok(())
}
