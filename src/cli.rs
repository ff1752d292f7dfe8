use crate::config;
use crate::core::action::Action;
use crate::core::processor::CommandRequest;
use crate::error::{AppError, AppResult};
use crate::model::common::{parse_category_id, CategoryId, LangId};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fop:category",
    author,
    version,
    about = "Manage your categories. This command does not support multiple shops.",
    long_about = "Manage your categories:\n  - enable or disable a single category (toggle)\n  - disable leaf categories without an active product (disable-empty)\n  - enable leaf categories holding an active product (enable-no-empty)\n  - report both cases without changing anything (status)\nThis command does NOT support multiple shops.",
    after_help = format!(
        "Possible actions:\n    {}\n\nExamples:\n    fop_category toggle -c 3\n    fop_category disable-empty --exclude 12,14,20",
        Action::allowed()
    )
)]
pub struct CliArgs {
    #[arg(
        default_value = config::DEFAULT_ACTION,
        value_name = "ACTION",
        help = "status, toggle, enable-no-empty or disable-empty"
    )]
    action: String,

    #[arg(long = "id-lang", value_name = "ID", help = "Language id (defaults to the shop default language)")]
    id_lang: Option<LangId>,

    #[arg(
        short = 'c',
        long = "id-category",
        value_name = "ID",
        help = "Category to toggle (asked interactively when missing)"
    )]
    id_category: Option<CategoryId>,

    #[arg(
        long,
        value_delimiter = ',',
        value_name = "IDS",
        help = "Category ids to exclude, separated by commas"
    )]
    exclude: Vec<String>,

    #[arg(short, long, help = "Run even when several shops are configured")]
    force: bool,

    #[arg(
        long,
        env = config::CATALOG_ENV_VAR,
        default_value = config::DEFAULT_CATALOG_PATH,
        value_name = "FILE_PATH",
        help = "Catalog data file"
    )]
    catalog: String,

    #[arg(short, long, help = "Print debug diagnostics")]
    verbose: bool,
}

impl CliArgs {
    pub fn get_catalog_path(&self) -> PathBuf {
        PathBuf::from(&self.catalog)
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn to_request(&self) -> AppResult<CommandRequest> {
        Ok(CommandRequest {
            action: self.action.trim().to_string(),
            lang: self.id_lang,
            category: self.id_category,
            exclude: parse_exclusions(&self.exclude)?,
            force: self.force,
        })
    }
}

/// Normalizes `--exclude` values to integer ids. Accepts the bracketed
/// `[3,4]` form and stray whitespace.
pub fn parse_exclusions(raw: &[String]) -> AppResult<Vec<CategoryId>> {
    let mut ids = Vec::new();
    let mut invalid = Vec::new();

    for entry in raw {
        let cleaned = entry.trim().trim_matches(|c: char| c == '[' || c == ']').trim();
        if cleaned.is_empty() {
            continue;
        }
        match parse_category_id(cleaned) {
            Some(id) => ids.push(id),
            None => invalid.push(cleaned.to_string()),
        }
    }

    if !invalid.is_empty() {
        return Err(AppError::Argument(format!(
            "--exclude expects category ids, got: {}",
            invalid.join(", ")
        )));
    }
    Ok(ids)
}

/// Asks for the category to toggle on `output` and reads one line of `input`.
pub fn read_category_id<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> AppResult<CategoryId> {
    write!(output, "Which id_category do you want to toggle? ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::Argument(
            "No category id given. Use -c or --id-category.".into(),
        ));
    }
    parse_category_id(&line).ok_or_else(|| {
        AppError::Argument(format!("'{}' is not a category id", line.trim()))
    })
}

pub fn prompt_category_id() -> AppResult<CategoryId> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    read_category_id(&mut stdin.lock(), &mut stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("fop_category").chain(argv.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_to_status() {
        let request = args(&[]).to_request().unwrap();
        assert_eq!(request.action, "status");
        assert_eq!(request.lang, None);
        assert!(request.exclude.is_empty());
        assert!(!request.force);
    }

    #[test]
    fn reads_all_options() {
        let request = args(&["toggle", "-c", "3", "--id-lang", "2", "-f"])
            .to_request()
            .unwrap();
        assert_eq!(request.action, "toggle");
        assert_eq!(request.category, Some(3));
        assert_eq!(request.lang, Some(2));
        assert!(request.force);
    }

    #[test]
    fn exclude_accepts_brackets_and_spaces() {
        let request = args(&["--exclude=[12, 14,20]"]).to_request().unwrap();
        assert_eq!(request.exclude, vec![12, 14, 20]);
    }

    #[test]
    fn exclude_rejects_non_numeric_ids() {
        let err = parse_exclusions(&["3".into(), "abc".into()]).unwrap_err();
        assert!(matches!(err, AppError::Argument(msg) if msg.contains("abc")));
    }

    #[test]
    fn unknown_action_is_accepted_by_the_parser() {
        // Rejected later with the list of allowed actions.
        assert_eq!(args(&["bogus"]).to_request().unwrap().action, "bogus");
    }

    #[test]
    fn prompt_reads_one_id() {
        let mut input = Cursor::new("  42\n");
        let mut output = Vec::new();
        assert_eq!(read_category_id(&mut input, &mut output).unwrap(), 42);
        assert!(String::from_utf8(output).unwrap().contains("id_category"));
    }

    #[test]
    fn prompt_on_closed_stdin_is_an_argument_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(matches!(
            read_category_id(&mut input, &mut output),
            Err(AppError::Argument(_))
        ));
    }
}
