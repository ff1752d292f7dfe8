pub mod json;

use crate::config::PlatformConfig;
use crate::error::AppResult;
use crate::model::category::{CategoryRecord, CategorySummary};
use crate::model::common::{CategoryId, LangId};

pub use json::JsonCatalogStore;

/// Data-access seam between the category operations and whatever holds the
/// catalog. Every call is blocking.
pub trait CatalogStore {
    fn total_tenant_count(&self) -> AppResult<usize>;

    fn platform_config(&self) -> AppResult<PlatformConfig>;

    /// All categories for `lang` in store order.
    fn list_categories(&self, lang: LangId) -> AppResult<Vec<CategorySummary>>;

    /// Direct children only. Empty means `id` is a leaf.
    fn list_children(&self, id: CategoryId, lang: LangId) -> AppResult<Vec<CategoryId>>;

    fn load_category(&self, id: CategoryId, lang: LangId) -> AppResult<CategoryRecord>;

    /// Number of active products in the category, capped at `limit` (0 means
    /// no cap).
    fn count_active_products(&self, id: CategoryId, lang: LangId, limit: usize)
        -> AppResult<usize>;

    fn category_exists(&self, id: CategoryId) -> AppResult<bool>;

    /// Persists the flag for one category. Atomic per record.
    fn update_active_flag(&mut self, id: CategoryId, lang: LangId, active: bool)
        -> AppResult<()>;
}
