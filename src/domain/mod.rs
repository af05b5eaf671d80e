// ==========================================
// PM Scheduling Core - Domain Model Layer
// ==========================================
// Typed records and enums only: no data access, no engine logic.
// Equipment and CompletionRecord are owned by their external stores;
// EligibilityResult and PmAssignment are recomputed every run.
// ==========================================

pub mod assignment;
pub mod completion;
pub mod equipment;
pub mod types;

pub use assignment::{week_label, EligibilityResult, PmAssignment};
pub use completion::CompletionRecord;
pub use equipment::Equipment;
pub use types::{EligibilityStatus, OperationalStatus, PmType};
