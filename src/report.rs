use crate::core::guard::TenantMode;
use crate::core::scanner::ScanMode;
use crate::error::AppResult;
use crate::model::output::{Outcome, RunOutcome, ScanReport, ToggleResult};
use colored::*;
use std::io::{self, Write};

const EXCLUDE_HINT: &str = " -- To exclude categories add --exclude ID,ID2,ID3";

fn title<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", text.yellow().bold())?;
    writeln!(out, "{}", "=".repeat(text.chars().count()).yellow())?;
    writeln!(out)?;
    Ok(())
}

fn success<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{} {}", "[OK]".green().bold(), text)?;
    Ok(())
}

fn render_tenancy<W: Write>(out: &mut W, tenancy: &TenantMode) -> io::Result<()> {
    if let TenantMode::ForcedMulti { shops } = tenancy {
        writeln!(
            out,
            "{} Forced run on {} shops. Results may be wrong for every shop but the default one.",
            "[WARNING]".red().bold(),
            shops
        )?;
    }
    Ok(())
}

fn render_status<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    if report.is_consistent() {
        return success(
            out,
            "All categories with an active product are enabled and all categories without an active product are disabled.",
        );
    }
    if !report.to_deactivate.is_empty() {
        title(out, "The following categories are enabled but have no active product")?;
        writeln!(out, "{}", report.to_deactivate.join(" / "))?;
        writeln!(out, " -- You can run `fop_category disable-empty` to fix it")?;
        writeln!(out, "{}", EXCLUDE_HINT)?;
    }
    if !report.to_activate.is_empty() {
        title(out, "The following categories are disabled but have an active product")?;
        writeln!(out, "{}", report.to_activate.join(" / "))?;
        writeln!(out, " -- You can run `fop_category enable-no-empty` to fix it")?;
        writeln!(out, "{}", EXCLUDE_HINT)?;
    }
    Ok(())
}

fn render_fixed<W: Write>(out: &mut W, fixed: &[String], done: &str, nothing: &str) -> io::Result<()> {
    if fixed.is_empty() {
        return success(out, nothing);
    }
    title(out, done)?;
    writeln!(out, "{}", fixed.join(", "))?;
    Ok(())
}

fn render_toggle<W: Write>(out: &mut W, result: &ToggleResult) -> io::Result<()> {
    let state = if result.active { "enabled" } else { "disabled" };
    success(
        out,
        &format!("The category {} is now {}.", result.name, state),
    )
}

pub fn render<W: Write>(out: &mut W, run: &RunOutcome) -> io::Result<()> {
    render_tenancy(out, &run.tenancy)?;
    match &run.outcome {
        Outcome::Scanned {
            mode: ScanMode::Report,
            report,
        } => render_status(out, report),
        Outcome::Scanned {
            mode: ScanMode::DisableEmpty,
            report,
        } => render_fixed(
            out,
            &report.to_deactivate,
            "The following categories have been disabled",
            "All categories without an active product are disabled.",
        ),
        Outcome::Scanned {
            mode: ScanMode::EnableNoEmpty,
            report,
        } => render_fixed(
            out,
            &report.to_activate,
            "The following categories have been enabled",
            "All categories with an active product are enabled.",
        ),
        Outcome::Toggled(result) => render_toggle(out, result),
    }?;
    out.flush()
}

/// Renders the report. A closed reader (`| head`) is not a failure: the
/// catalog work already happened.
pub fn print<W: Write>(out: &mut W, run: &RunOutcome) -> AppResult<()> {
    match render(out, run) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => Ok(other?),
    }
}
