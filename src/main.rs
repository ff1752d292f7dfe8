use clap::error::ErrorKind;
use clap::Parser;
use fop_category::cli::{self, CliArgs};
use fop_category::core::processor;
use fop_category::error::AppResult;
use fop_category::logging::{log, setup_logging, LogLevel};
use fop_category::model::output::RunOutcome;
use fop_category::report;
use fop_category::store::JsonCatalogStore;
use std::process::ExitCode;

fn execute(cli_args: &CliArgs) -> AppResult<RunOutcome> {
    let request = cli_args.to_request()?;
    let catalog_path = cli_args.get_catalog_path();
    let mut store = JsonCatalogStore::open(&catalog_path)?;
    log(
        LogLevel::Debug,
        &format!("Using catalog {}", store.path().display()),
    );
    processor::run(&mut store, &request, cli::prompt_category_id)
}

fn main() -> ExitCode {
    let cli_args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(2),
            };
        }
    };

    setup_logging(cli_args.is_verbose());

    match execute(&cli_args) {
        Ok(outcome) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = report::print(&mut stdout, &outcome) {
                log(LogLevel::Error, &format!("Failed to print report: {}", e));
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            if e.is_domain() {
                log(LogLevel::Error, &e.to_string());
            } else {
                log(LogLevel::Error, &format!("FATAL: {}", e));
            }
            ExitCode::FAILURE
        }
    }
}
