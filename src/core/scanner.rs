use crate::config::{self, PlatformConfig};
use crate::core::action::Action;
use crate::core::stats::{self, ScanStats};
use crate::error::{AppError, AppResult};
use crate::logging::{log, LogLevel};
use crate::model::common::{CategoryId, LangId};
use crate::model::output::ScanReport;
use crate::store::CatalogStore;
use std::collections::HashSet;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanMode {
    Report,
    DisableEmpty,
    EnableNoEmpty,
}

impl ScanMode {
    /// The action that starts a scan in this mode.
    pub fn action(self) -> Action {
        match self {
            ScanMode::Report => Action::Status,
            ScanMode::DisableEmpty => Action::DisableEmpty,
            ScanMode::EnableNoEmpty => Action::EnableNoEmpty,
        }
    }

    pub fn name(self) -> &'static str {
        self.action().as_str()
    }
}

/// Categories a scan never looks at: the caller's list plus the platform's
/// root and home categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet(HashSet<CategoryId>);

impl ExclusionSet {
    pub fn new(user: &[CategoryId], platform: &PlatformConfig) -> Self {
        ExclusionSet(
            user.iter()
                .copied()
                .chain(platform.reserved_categories())
                .collect(),
        )
    }

    pub fn contains(&self, id: CategoryId) -> bool {
        self.0.contains(&id)
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub lang: LangId,
    pub mode: ScanMode,
    pub exclusions: ExclusionSet,
}

enum Verdict {
    Consistent,
    ActiveButEmpty,
    InactiveButFilled,
}

fn judge(has_products: bool, active: bool) -> Verdict {
    match (has_products, active) {
        (false, true) => Verdict::ActiveButEmpty,
        (true, false) => Verdict::InactiveButFilled,
        _ => Verdict::Consistent,
    }
}

/// Classifies every eligible leaf category and, in a corrective mode, fixes
/// the matching bucket. The first failed update aborts the scan; updates
/// already written stay written.
pub fn scan<S: CatalogStore + ?Sized>(store: &mut S, request: &ScanRequest) -> AppResult<ScanReport> {
    let start = Instant::now();
    let mut report = ScanReport::default();
    let mut stats = ScanStats::default();

    let categories = store.list_categories(request.lang)?;
    log(
        LogLevel::Step,
        &format!(
            "Checking {} categories (lang {}, mode {}, {} excluded id(s))",
            categories.len(),
            request.lang,
            request.mode.name(),
            request.exclusions.len()
        ),
    );

    for summary in categories {
        if request.exclusions.contains(summary.id) {
            stats.add_excluded();
            continue;
        }
        if !store.list_children(summary.id, request.lang)?.is_empty() {
            stats.add_non_leaf();
            continue;
        }

        let record = store.load_category(summary.id, request.lang)?;
        let has_products = store.count_active_products(
            record.id,
            request.lang,
            config::PRODUCT_PROBE_LIMIT,
        )? > 0;

        match judge(has_products, record.active) {
            Verdict::Consistent => stats.add_consistent(),
            Verdict::ActiveButEmpty => {
                stats.add_to_deactivate();
                if request.mode == ScanMode::DisableEmpty {
                    store
                        .update_active_flag(record.id, request.lang, false)
                        .map_err(|e| AppError::persistence(record.label(), &e))?;
                    stats.add_updated();
                    log(LogLevel::Debug, &format!("Disabled {}", record));
                }
                report.to_deactivate.push(record.label());
            }
            Verdict::InactiveButFilled => {
                stats.add_to_activate();
                if request.mode == ScanMode::EnableNoEmpty {
                    store
                        .update_active_flag(record.id, request.lang, true)
                        .map_err(|e| AppError::persistence(record.label(), &e))?;
                    stats.add_updated();
                    log(LogLevel::Debug, &format!("Enabled {}", record));
                }
                report.to_activate.push(record.label());
            }
        }
    }

    stats::log_summary(&stats, request.mode.name(), start.elapsed());
    report.stats = stats;
    Ok(report)
}
