// ==========================================
// PM Scheduling Core - Domain Type Definitions
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// PM Type
// ==========================================
// Serialized SCREAMING_SNAKE_CASE to match the database text columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PmType {
    Monthly,
    Annual,
}

impl PmType {
    /// Database/text form of the PM type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PmType::Monthly => "MONTHLY",
            PmType::Annual => "ANNUAL",
        }
    }

    /// Parse the database text form.
    pub fn parse(value: &str) -> Option<PmType> {
        match value.trim().to_uppercase().as_str() {
            "MONTHLY" => Some(PmType::Monthly),
            "ANNUAL" => Some(PmType::Annual),
            _ => None,
        }
    }
}

impl fmt::Display for PmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Operational Status
// ==========================================
// Equipment that is not Active never enters scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationalStatus {
    Active,
    Inactive,
    Retired,
}

impl OperationalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationalStatus::Active => "ACTIVE",
            OperationalStatus::Inactive => "INACTIVE",
            OperationalStatus::Retired => "RETIRED",
        }
    }

    pub fn parse(value: &str) -> Option<OperationalStatus> {
        match value.trim().to_uppercase().as_str() {
            "ACTIVE" => Some(OperationalStatus::Active),
            "INACTIVE" => Some(OperationalStatus::Inactive),
            "RETIRED" => Some(OperationalStatus::Retired),
            _ => None,
        }
    }

    /// Whether equipment in this status may receive PM assignments.
    pub fn is_schedulable(&self) -> bool {
        matches!(self, OperationalStatus::Active)
    }
}

impl fmt::Display for OperationalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Eligibility Status
// ==========================================
// Outcome of one interval-rule evaluation for one equipment/PM-type pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EligibilityStatus {
    NotDue,
    Due,
    Overdue,
}

impl EligibilityStatus {
    /// Whether this status qualifies the equipment for assignment.
    pub fn is_eligible(&self) -> bool {
        matches!(self, EligibilityStatus::Due | EligibilityStatus::Overdue)
    }
}

impl fmt::Display for EligibilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EligibilityStatus::NotDue => write!(f, "NOT_DUE"),
            EligibilityStatus::Due => write!(f, "DUE"),
            EligibilityStatus::Overdue => write!(f, "OVERDUE"),
        }
    }
}
