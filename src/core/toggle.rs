use crate::error::{AppError, AppResult};
use crate::logging::{log, LogLevel};
use crate::model::common::{CategoryId, LangId};
use crate::model::output::ToggleResult;
use crate::store::CatalogStore;

/// Flips one category's active flag regardless of its products.
pub fn toggle<S: CatalogStore + ?Sized>(
    store: &mut S,
    id: CategoryId,
    lang: LangId,
) -> AppResult<ToggleResult> {
    if !store.category_exists(id)? {
        return Err(AppError::CategoryNotFound(id));
    }
    let record = store.load_category(id, lang)?;
    let active = !record.active;

    log(
        LogLevel::Debug,
        &format!("Toggling {}: active {} -> {}", record, record.active, active),
    );
    store
        .update_active_flag(id, lang, active)
        .map_err(|e| AppError::persistence(format!("with ID {}", id), &e))?;

    Ok(ToggleResult {
        id,
        name: record.name,
        active,
    })
}
