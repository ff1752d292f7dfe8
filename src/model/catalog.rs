use super::category::{CategoryRecord, CategorySummary};
use super::common::{
    deserialize_flexible_bool, deserialize_flexible_i64, deserialize_flexible_i64_vec,
    deserialize_optional_flexible_i64, CategoryId, LangId, ProductId, ShopId,
};
use crate::config::PlatformConfig;
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShopRecord {
    #[serde(deserialize_with = "deserialize_flexible_i64")]
    pub id: ShopId,
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LanguageRecord {
    #[serde(deserialize_with = "deserialize_flexible_i64")]
    pub id: LangId,
    #[serde(default)]
    pub iso_code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoredCategory {
    #[serde(deserialize_with = "deserialize_flexible_i64")]
    pub id: CategoryId,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_flexible_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub id_parent: Option<CategoryId>,
    #[serde(deserialize_with = "deserialize_flexible_bool")]
    pub active: bool,
    #[serde(default)]
    pub name: BTreeMap<LangId, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoredProduct {
    #[serde(deserialize_with = "deserialize_flexible_i64")]
    pub id: ProductId,
    #[serde(deserialize_with = "deserialize_flexible_bool")]
    pub active: bool,
    #[serde(default, deserialize_with = "deserialize_flexible_i64_vec")]
    pub categories: Vec<CategoryId>,
}

/// Whole catalog as held in a catalog file. Query helpers here are shared by
/// every store backed by an in-memory copy.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogData {
    pub configuration: PlatformConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shops: Option<Vec<ShopRecord>>,
    #[serde(default)]
    pub languages: Vec<LanguageRecord>,
    #[serde(default)]
    pub categories: Vec<StoredCategory>,
    #[serde(default)]
    pub products: Vec<StoredProduct>,
}

impl CatalogData {
    pub fn new(configuration: PlatformConfig) -> Self {
        CatalogData {
            configuration,
            shops: None,
            languages: Vec::new(),
            categories: Vec::new(),
            products: Vec::new(),
        }
    }

    pub fn shop_count(&self) -> usize {
        self.shops.as_ref().map_or(1, Vec::len)
    }

    pub fn check_language(&self, lang: LangId) -> AppResult<()> {
        if self.languages.is_empty() || self.languages.iter().any(|l| l.id == lang) {
            Ok(())
        } else {
            Err(AppError::UnknownLanguage(lang))
        }
    }

    pub fn category(&self, id: CategoryId) -> Option<&StoredCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Categories translated in `lang`, in catalog order.
    pub fn categories_for(&self, lang: LangId) -> AppResult<Vec<CategorySummary>> {
        self.check_language(lang)?;
        Ok(self
            .categories
            .iter()
            .filter_map(|c| {
                c.name.get(&lang).map(|name| CategorySummary {
                    id: c.id,
                    name: name.clone(),
                    active: c.active,
                })
            })
            .collect())
    }

    pub fn children_of(&self, id: CategoryId) -> Vec<CategoryId> {
        self.categories
            .iter()
            .filter(|c| c.id_parent == Some(id) && c.id != id)
            .map(|c| c.id)
            .collect()
    }

    pub fn record(&self, id: CategoryId, lang: LangId) -> AppResult<CategoryRecord> {
        self.check_language(lang)?;
        let stored = self.category(id).ok_or(AppError::CategoryNotFound(id))?;
        Ok(CategoryRecord {
            id: stored.id,
            name: stored.name.get(&lang).cloned().unwrap_or_default(),
            active: stored.active,
        })
    }

    /// Counts active products linked to `id`, stopping at `limit` when it is
    /// non-zero.
    pub fn count_active_products(&self, id: CategoryId, limit: usize) -> usize {
        let matching = self
            .products
            .iter()
            .filter(|p| p.active && p.categories.contains(&id));
        if limit == 0 {
            matching.count()
        } else {
            matching.take(limit).count()
        }
    }

    /// Sets the flag and returns the previous value.
    pub fn set_active(&mut self, id: CategoryId, active: bool) -> AppResult<bool> {
        let stored = self
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(AppError::CategoryNotFound(id))?;
        Ok(std::mem::replace(&mut stored.active, active))
    }
}
