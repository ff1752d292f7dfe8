use crate::core::action::Action;
use crate::core::guard;
use crate::core::scanner::{self, ExclusionSet, ScanMode, ScanRequest};
use crate::core::toggle;
use crate::error::AppResult;
use crate::logging::{log, LogLevel};
use crate::model::common::{CategoryId, LangId};
use crate::model::output::{Outcome, RunOutcome};
use crate::store::CatalogStore;

/// One invocation of the command, already normalized from CLI input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandRequest {
    pub action: String,
    pub lang: Option<LangId>,
    pub category: Option<CategoryId>,
    pub exclude: Vec<CategoryId>,
    pub force: bool,
}

/// Runs the guard, resolves the action and executes it. `ask_category` is
/// only called for `toggle` when no category was given.
pub fn run<S, F>(store: &mut S, request: &CommandRequest, ask_category: F) -> AppResult<RunOutcome>
where
    S: CatalogStore + ?Sized,
    F: FnOnce() -> AppResult<CategoryId>,
{
    let tenancy = guard::check_tenancy(store, request.force)?;

    let action: Action = request.action.parse()?;
    let platform = store.platform_config()?;
    let lang = platform.resolve_lang(request.lang);
    log(
        LogLevel::Debug,
        &format!("Action '{}' in language {}", action, lang),
    );

    let mode = match action {
        Action::Status => ScanMode::Report,
        Action::DisableEmpty => ScanMode::DisableEmpty,
        Action::EnableNoEmpty => ScanMode::EnableNoEmpty,
        Action::Toggle => {
            let id = match request.category {
                Some(id) => id,
                None => ask_category()?,
            };
            let result = toggle::toggle(store, id, lang)?;
            return Ok(RunOutcome {
                tenancy,
                outcome: Outcome::Toggled(result),
            });
        }
    };

    let scan_request = ScanRequest {
        lang,
        mode,
        exclusions: ExclusionSet::new(&request.exclude, &platform),
    };
    let report = scanner::scan(store, &scan_request)?;
    Ok(RunOutcome {
        tenancy,
        outcome: Outcome::Scanned { mode, report },
    })
}
