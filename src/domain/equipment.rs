// ==========================================
// PM Scheduling Core - Equipment Entity
// ==========================================
// Owned by the external equipment catalog; read-only here.
// Immutable for the duration of one scheduling run.
// ==========================================

use crate::domain::types::{OperationalStatus, PmType};
use serde::{Deserialize, Serialize};

/// One piece of maintainable equipment from the catalog.
///
/// `equipment_id` is the unique maintenance tag. `monthly_pm` / `annual_pm`
/// flag which recurring PM programs apply; both may be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub equipment_id: String,
    pub description: String,
    pub location: String,
    pub status: OperationalStatus,
    pub monthly_pm: bool,
    pub annual_pm: bool,
}

impl Equipment {
    /// PM types this equipment participates in, in fixed Monthly-then-Annual order.
    pub fn applicable_types(&self) -> Vec<PmType> {
        let mut types = Vec::with_capacity(2);
        if self.monthly_pm {
            types.push(PmType::Monthly);
        }
        if self.annual_pm {
            types.push(PmType::Annual);
        }
        types
    }

    /// Whether this equipment may enter scheduling at all.
    pub fn is_schedulable(&self) -> bool {
        self.status.is_schedulable() && (self.monthly_pm || self.annual_pm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equipment(status: OperationalStatus, monthly: bool, annual: bool) -> Equipment {
        Equipment {
            equipment_id: "PUMP-001".to_string(),
            description: "Feed pump".to_string(),
            location: "Building A".to_string(),
            status,
            monthly_pm: monthly,
            annual_pm: annual,
        }
    }

    #[test]
    fn test_applicable_types_order() {
        let eq = equipment(OperationalStatus::Active, true, true);
        assert_eq!(eq.applicable_types(), vec![PmType::Monthly, PmType::Annual]);

        let eq = equipment(OperationalStatus::Active, false, true);
        assert_eq!(eq.applicable_types(), vec![PmType::Annual]);
    }

    #[test]
    fn test_is_schedulable() {
        assert!(equipment(OperationalStatus::Active, true, false).is_schedulable());
        assert!(!equipment(OperationalStatus::Inactive, true, true).is_schedulable());
        assert!(!equipment(OperationalStatus::Retired, true, true).is_schedulable());
        // No PM program at all means nothing to schedule.
        assert!(!equipment(OperationalStatus::Active, false, false).is_schedulable());
    }
}
