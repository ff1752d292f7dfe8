use super::common::CategoryId;
use crate::core::guard::TenantMode;
use crate::core::scanner::ScanMode;
use crate::core::stats::ScanStats;

/// Leaf categories whose active flag disagrees with their products. Entries
/// are `"name (id)"` labels in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Active but without any active product.
    pub to_deactivate: Vec<String>,
    /// Inactive but holding at least one active product.
    pub to_activate: Vec<String>,
    pub stats: ScanStats,
}

impl ScanReport {
    pub fn is_consistent(&self) -> bool {
        self.to_deactivate.is_empty() && self.to_activate.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleResult {
    pub id: CategoryId,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Scanned { mode: ScanMode, report: ScanReport },
    Toggled(ToggleResult),
}

/// What a run did, plus the tenancy it ran under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub tenancy: TenantMode,
    pub outcome: Outcome,
}
