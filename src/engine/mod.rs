// ==========================================
// PM Scheduling Core - Engine Layer
// ==========================================
// Business rules live here; no SQL. Eligibility and generation never fail
// for normal empty-result cases: no history, no eligible equipment and an
// empty roster are valid outcomes.
// ==========================================

pub mod assignment;
pub mod date_parser;
pub mod eligibility;
pub mod orchestrator;

pub use assignment::{AssignmentGenerator, EligibleItem};
pub use date_parser::DateParser;
pub use eligibility::EligibilityChecker;
pub use orchestrator::ScheduleOrchestrator;
