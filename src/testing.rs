//! In-memory catalog used by unit and integration tests. It records every
//! store call and can be told to fail updates for chosen categories.

use crate::config::PlatformConfig;
use crate::error::{AppError, AppResult};
use crate::model::catalog::{CatalogData, ShopRecord, StoredCategory, StoredProduct};
use crate::model::category::{CategoryRecord, CategorySummary};
use crate::model::common::{CategoryId, LangId, ProductId};
use crate::store::CatalogStore;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};

pub const FIXTURE_LANG: LangId = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    TotalTenantCount,
    PlatformConfig,
    ListCategories(LangId),
    ListChildren(CategoryId),
    LoadCategory(CategoryId),
    CountActiveProducts(CategoryId),
    CategoryExists(CategoryId),
    UpdateActiveFlag(CategoryId, bool),
}

#[derive(Debug)]
pub struct FixtureStore {
    pub data: CatalogData,
    calls: RefCell<Vec<StoreCall>>,
    failing_updates: HashSet<CategoryId>,
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureStore {
    /// Language 1, root category 1, home category 2, one shop.
    pub fn new() -> Self {
        Self::with_config(PlatformConfig {
            default_lang_id: FIXTURE_LANG,
            root_category_id: 1,
            home_category_id: 2,
        })
    }

    pub fn with_config(configuration: PlatformConfig) -> Self {
        FixtureStore {
            data: CatalogData::new(configuration),
            calls: RefCell::new(Vec::new()),
            failing_updates: HashSet::new(),
        }
    }

    pub fn with_shops(mut self, count: usize) -> Self {
        self.data.shops = Some(
            (1..=count as i64)
                .map(|id| ShopRecord {
                    id,
                    name: format!("Shop {}", id),
                })
                .collect(),
        );
        self
    }

    /// Adds a category named in the fixture language.
    pub fn category(
        mut self,
        id: CategoryId,
        name: &str,
        parent: Option<CategoryId>,
        active: bool,
    ) -> Self {
        self.data.categories.push(StoredCategory {
            id,
            id_parent: parent,
            active,
            name: BTreeMap::from([(FIXTURE_LANG, name.to_string())]),
        });
        self
    }

    pub fn product(mut self, id: ProductId, active: bool, categories: &[CategoryId]) -> Self {
        self.data.products.push(StoredProduct {
            id,
            active,
            categories: categories.to_vec(),
        });
        self
    }

    pub fn fail_updates_for(mut self, id: CategoryId) -> Self {
        self.failing_updates.insert(id);
        self
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.borrow().clone()
    }

    /// Updates that went through, in call order.
    pub fn updates(&self) -> Vec<(CategoryId, bool)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                StoreCall::UpdateActiveFlag(id, active) if !self.failing_updates.contains(id) => {
                    Some((*id, *active))
                }
                _ => None,
            })
            .collect()
    }

    pub fn is_active(&self, id: CategoryId) -> bool {
        self.data.category(id).map_or(false, |c| c.active)
    }

    fn record(&self, call: StoreCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl CatalogStore for FixtureStore {
    fn total_tenant_count(&self) -> AppResult<usize> {
        self.record(StoreCall::TotalTenantCount);
        Ok(self.data.shop_count())
    }

    fn platform_config(&self) -> AppResult<PlatformConfig> {
        self.record(StoreCall::PlatformConfig);
        Ok(self.data.configuration)
    }

    fn list_categories(&self, lang: LangId) -> AppResult<Vec<CategorySummary>> {
        self.record(StoreCall::ListCategories(lang));
        self.data.categories_for(lang)
    }

    fn list_children(&self, id: CategoryId, _lang: LangId) -> AppResult<Vec<CategoryId>> {
        self.record(StoreCall::ListChildren(id));
        Ok(self.data.children_of(id))
    }

    fn load_category(&self, id: CategoryId, lang: LangId) -> AppResult<CategoryRecord> {
        self.record(StoreCall::LoadCategory(id));
        self.data.record(id, lang)
    }

    fn count_active_products(
        &self,
        id: CategoryId,
        _lang: LangId,
        limit: usize,
    ) -> AppResult<usize> {
        self.record(StoreCall::CountActiveProducts(id));
        Ok(self.data.count_active_products(id, limit))
    }

    fn category_exists(&self, id: CategoryId) -> AppResult<bool> {
        self.record(StoreCall::CategoryExists(id));
        Ok(self.data.category(id).is_some())
    }

    fn update_active_flag(&mut self, id: CategoryId, _lang: LangId, active: bool) -> AppResult<()> {
        self.record(StoreCall::UpdateActiveFlag(id, active));
        if self.failing_updates.contains(&id) {
            return Err(AppError::store(format!("update rejected for category {}", id)));
        }
        self.data.set_active(id, active).map(|_| ())
    }
}
