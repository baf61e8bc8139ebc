use std::path::Path;

use anyhow::Result;

use super::{CommandResult, CommandSummary};
use crate::{
    catalog::Catalog,
    issues::{Issue, Severity},
};

pub fn finish(summary: CommandSummary, mut issues: Vec<Issue>) -> CommandResult {
    issues.sort();

    let mut error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    if let CommandSummary::Init(ref summary) = summary
        && summary.error.is_some()
    {
        error_count += 1;
    }

    CommandResult {
        summary,
        error_count,
        warning_count,
        issues,
    }
}

/// Load a single translation file for the per-file commands.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    Ok(Catalog::load(path)?)
}
