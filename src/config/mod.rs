// ==========================================
// PM Scheduling Core - Configuration Layer
// ==========================================
// Storage: config_kv table. Engines never read configuration themselves;
// they take a validated SchedulingConfig at construction.
// ==========================================

pub mod config_manager;
pub mod scheduling_config;

pub use config_manager::{config_keys, ConfigManager};
pub use scheduling_config::SchedulingConfig;
