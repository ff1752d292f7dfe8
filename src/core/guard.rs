use crate::config;
use crate::error::{AppError, AppResult};
use crate::logging::{log, LogLevel};
use crate::store::CatalogStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantMode {
    Single,
    /// Several shops exist and the caller forced the run anyway. Scans and
    /// updates are not scoped per shop.
    ForcedMulti { shops: usize },
}

/// Must be the first store call of a run.
pub fn check_tenancy<S: CatalogStore + ?Sized>(store: &S, force: bool) -> AppResult<TenantMode> {
    let shops = store.total_tenant_count()?;
    if shops <= config::MAX_SINGLE_TENANT_SHOPS {
        return Ok(TenantMode::Single);
    }
    if !force {
        return Err(AppError::GuardBlocked { shops });
    }
    log(
        LogLevel::Warning,
        &format!(
            "Multiple shops enabled ({}), running in force mode. Changes are not scoped per shop.",
            shops
        ),
    );
    Ok(TenantMode::ForcedMulti { shops })
}
