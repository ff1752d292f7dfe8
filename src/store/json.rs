use super::CatalogStore;
use crate::config::PlatformConfig;
use crate::error::AppResult;
use crate::io;
use crate::logging::{log, LogLevel};
use crate::model::catalog::CatalogData;
use crate::model::category::{CategoryRecord, CategorySummary};
use crate::model::common::{CategoryId, LangId};
use std::path::{Path, PathBuf};

/// Catalog kept in a single JSON file. Every flag update rewrites the file.
#[derive(Debug)]
pub struct JsonCatalogStore {
    path: PathBuf,
    data: CatalogData,
}

impl JsonCatalogStore {
    pub fn open(path: &Path) -> AppResult<Self> {
        let data: CatalogData = io::load_json(path)?;
        log(
            LogLevel::Debug,
            &format!(
                "Loaded catalog '{}' ({} categories, {} products, {} shop(s))",
                path.display(),
                data.categories.len(),
                data.products.len(),
                data.shop_count()
            ),
        );
        Ok(JsonCatalogStore {
            path: path.to_path_buf(),
            data,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &CatalogData {
        &self.data
    }
}

impl CatalogStore for JsonCatalogStore {
    fn total_tenant_count(&self) -> AppResult<usize> {
        Ok(self.data.shop_count())
    }

    fn platform_config(&self) -> AppResult<PlatformConfig> {
        Ok(self.data.configuration)
    }

    fn list_categories(&self, lang: LangId) -> AppResult<Vec<CategorySummary>> {
        self.data.categories_for(lang)
    }

    fn list_children(&self, id: CategoryId, _lang: LangId) -> AppResult<Vec<CategoryId>> {
        Ok(self.data.children_of(id))
    }

    fn load_category(&self, id: CategoryId, lang: LangId) -> AppResult<CategoryRecord> {
        self.data.record(id, lang)
    }

    fn count_active_products(
        &self,
        id: CategoryId,
        _lang: LangId,
        limit: usize,
    ) -> AppResult<usize> {
        Ok(self.data.count_active_products(id, limit))
    }

    fn category_exists(&self, id: CategoryId) -> AppResult<bool> {
        Ok(self.data.category(id).is_some())
    }

    fn update_active_flag(&mut self, id: CategoryId, _lang: LangId, active: bool) -> AppResult<()> {
        let previous = self.data.set_active(id, active)?;
        let ctx = format!("category {}", id);
        if let Err(e) = io::save_json(&self.path, &self.data, &ctx) {
            self.data.set_active(id, previous)?;
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::fs;

    const CATALOG: &str = r#"{
        "configuration": {"PS_LANG_DEFAULT": 1, "PS_ROOT_CATEGORY": 1, "PS_HOME_CATEGORY": 2},
        "categories": [
            {"id": 1, "active": true, "name": {"1": "Root"}},
            {"id": 2, "id_parent": 1, "active": true, "name": {"1": "Home"}},
            {"id": 3, "id_parent": 2, "active": true, "name": {"1": "Shoes"}}
        ]
    }"#;

    #[test]
    fn update_is_written_back_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, CATALOG).unwrap();

        let mut store = JsonCatalogStore::open(&path).unwrap();
        store.update_active_flag(3, 1, false).unwrap();

        let reopened = JsonCatalogStore::open(&path).unwrap();
        assert!(!reopened.load_category(3, 1).unwrap().active);
        assert_eq!(reopened.list_children(2, 1).unwrap(), vec![3]);
    }

    #[test]
    fn failed_write_reverts_the_in_memory_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, CATALOG).unwrap();
        let mut store = JsonCatalogStore::open(&path).unwrap();

        // Point the store at a directory that no longer exists.
        store.path = dir.path().join("gone").join("catalog.json");
        assert!(matches!(
            store.update_active_flag(3, 1, false),
            Err(AppError::Io(_))
        ));
        assert!(store.load_category(3, 1).unwrap().active);
    }

    #[test]
    fn unknown_category_update_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, CATALOG).unwrap();
        let mut store = JsonCatalogStore::open(&path).unwrap();
        assert_eq!(
            store.update_active_flag(42, 1, true).unwrap_err(),
            AppError::CategoryNotFound(42)
        );
    }
}
