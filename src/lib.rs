// ==========================================
// Preventive-Maintenance Scheduling Core
// ==========================================
// Decides, for one scheduling week, which equipment is due for PM, which
// technician performs it, and how many assignments each technician gets.
// Persistence of the output, notification and availability calendars are
// external collaborators' concerns.
// ==========================================

// Domain layer: entities and types
pub mod domain;

// Data access layer
pub mod repository;

// Engine layer: business rules
pub mod engine;

// Configuration layer
pub mod config;

// Database infrastructure (connection init / unified PRAGMAs)
pub mod db;

// Crate-level error taxonomy
pub mod error;

// Logging
pub mod logging;

// ==========================================
// Re-exports
// ==========================================

pub use config::{ConfigManager, SchedulingConfig};
pub use domain::{
    week_label, CompletionRecord, EligibilityResult, EligibilityStatus, Equipment,
    OperationalStatus, PmAssignment, PmType,
};
pub use engine::{
    AssignmentGenerator, DateParser, EligibilityChecker, EligibleItem, ScheduleOrchestrator,
};
pub use error::{ScheduleError, ScheduleResult};
pub use repository::{
    CompletionRecordRepository, EquipmentCatalog, RepositoryError, RepositoryResult,
    SqliteCompletionRepository, SqliteEquipmentCatalog,
};

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "PM Scheduling Core";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
