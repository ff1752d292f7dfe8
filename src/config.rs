use crate::model::common::{deserialize_flexible_i64, CategoryId, LangId};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATALOG_PATH: &str = "./catalog.json";
pub const CATALOG_ENV_VAR: &str = "FOP_CATALOG";
pub const DEFAULT_ACTION: &str = "status";

/// Only existence of an active product matters, never the exact count.
pub const PRODUCT_PROBE_LIMIT: usize = 1;

pub const MAX_SINGLE_TENANT_SHOPS: usize = 1;

/// Platform-wide settings owned by the catalog. Read once per run and handed
/// to the operations that need them.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformConfig {
    #[serde(rename = "PS_LANG_DEFAULT", deserialize_with = "deserialize_flexible_i64")]
    pub default_lang_id: LangId,
    #[serde(rename = "PS_ROOT_CATEGORY", deserialize_with = "deserialize_flexible_i64")]
    pub root_category_id: CategoryId,
    #[serde(rename = "PS_HOME_CATEGORY", deserialize_with = "deserialize_flexible_i64")]
    pub home_category_id: CategoryId,
}

impl PlatformConfig {
    pub fn reserved_categories(&self) -> [CategoryId; 2] {
        [self.root_category_id, self.home_category_id]
    }

    /// `--id-lang 0` means "not given", like a missing option.
    pub fn resolve_lang(&self, requested: Option<LangId>) -> LangId {
        requested
            .filter(|&id| id != 0)
            .unwrap_or(self.default_lang_id)
    }
}
