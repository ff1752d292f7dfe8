use super::common::CategoryId;
use std::fmt;

/// One row of the flat category listing for a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub name: String,
    pub active: bool,
}

/// Immutable snapshot of a single category as seen in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    pub active: bool,
}

impl CategoryRecord {
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CategoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
