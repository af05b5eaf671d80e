// ==========================================
// PM Scheduling Core - Data Access Layer
// ==========================================
// Repositories contain no business logic; they validate rows into typed
// records and hide database details. All queries are parameterized.
// ==========================================

pub mod completion_repo;
pub mod equipment_repo;
pub mod error;

pub use completion_repo::{CompletionRecordRepository, SqliteCompletionRepository};
pub use equipment_repo::{EquipmentCatalog, SqliteEquipmentCatalog};
pub use error::{RepositoryError, RepositoryResult};
