use anyhow::Result;
use clap::ValueEnum;

use crate::{
    commands::{RunResult, context::CheckContext},
    issues::{Issue, Rule, Severity},
    rules::{
        check_empty_translations, check_placeholders, check_unfinished, check_unknown_status,
        parse_error_issue,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckType {
    Unfinished,
    EmptyTranslation,
    PlaceholderMismatch,
    UnknownStatus,
}

impl CheckType {
    pub fn all() -> Vec<CheckType> {
        vec![
            CheckType::Unfinished,
            CheckType::EmptyTranslation,
            CheckType::PlaceholderMismatch,
            CheckType::UnknownStatus,
        ]
    }
}

/// The orchestrator for check operations.
///
/// Holds the [`CheckContext`] and the rules to run. Files that fail to
/// load are always reported as `parse-error` issues, whichever rules are
/// selected.
pub struct CheckRunner {
    checks: Vec<CheckType>,
    ctx: CheckContext,
}

impl CheckRunner {
    pub fn new(ctx: CheckContext) -> Self {
        Self {
            checks: Vec::new(),
            ctx,
        }
    }

    pub fn add(mut self, check: CheckType) -> Self {
        if !self.checks.contains(&check) {
            self.checks.push(check);
        }
        self
    }

    pub fn all(self) -> Self {
        CheckType::all()
            .into_iter()
            .fold(self, |runner, check| runner.add(check))
    }

    pub fn context(&self) -> &CheckContext {
        &self.ctx
    }

    pub fn run(&self) -> Result<RunResult> {
        let scanned = self.ctx.ensure_catalogs()?;
        let ignore_contexts = &self.ctx.config.ignore_contexts;
        let mut all_issues = Vec::new();

        for loaded in &scanned.catalogs {
            let file_path = self.ctx.display_path(&loaded.path);
            let catalog = &loaded.catalog;

            for check in &self.checks {
                if self.ctx.verbose {
                    eprintln!("Running {:?} on {}", check, file_path);
                }
                match check {
                    CheckType::Unfinished => all_issues.extend(
                        check_unfinished(&file_path, catalog, ignore_contexts)
                            .into_iter()
                            .map(Issue::Unfinished),
                    ),
                    CheckType::EmptyTranslation => all_issues.extend(
                        check_empty_translations(&file_path, catalog, ignore_contexts)
                            .into_iter()
                            .map(Issue::EmptyTranslation),
                    ),
                    CheckType::PlaceholderMismatch => all_issues.extend(
                        check_placeholders(&file_path, catalog, ignore_contexts)
                            .into_iter()
                            .map(Issue::PlaceholderMismatch),
                    ),
                    CheckType::UnknownStatus => all_issues.extend(
                        check_unknown_status(&file_path, catalog, ignore_contexts)
                            .into_iter()
                            .map(Issue::UnknownStatus),
                    ),
                }
            }
        }

        for failure in &scanned.failures {
            let mut issue = parse_error_issue(failure);
            issue.file_path = self.ctx.display_path(failure.path());
            all_issues.push(Issue::ParseError(issue));
        }

        Ok(finish(all_issues, scanned.file_count()))
    }
}

fn finish(mut issues: Vec<Issue>, files_checked: usize) -> RunResult {
    issues.sort();

    let parse_error_count = issues
        .iter()
        .filter(|i| i.rule() == Rule::ParseError)
        .count();
    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    RunResult {
        error_count,
        warning_count,
        issues,
        parse_error_count,
        files_checked,
    }
}
