//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format. Kept apart from the
//! checking logic so tscat can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, ContextsSummary, ExportSummary, InitSummary,
    LookupSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(files: usize) {
    print_success_to(files, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} translation {} - no issues found",
            files,
            if files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print a warning about files that could not be loaded.
pub fn print_parse_warning(count: usize) {
    print_parse_warning_to(count, &mut io::stderr().lock());
}

/// Print a load warning to a custom writer. The failures themselves are
/// reported as `parse-error` issues.
pub fn print_parse_warning_to<W: Write>(count: usize, writer: &mut W) {
    if count > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be loaded and were skipped by the other rules",
            "warning:".bold().yellow(),
            count,
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line
    let location = match issue.location() {
        ReportLocation::Entry(entry) => format!("{}:{}", entry.file_path, entry.line),
        ReportLocation::File {
            path,
            line: Some(line),
        } => format!("{}:{}", path, line),
        ReportLocation::File { path, line: None } => path.to_string(),
    };
    let _ = writeln!(writer, "  {} {}", "-->".blue(), location);

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            if total_problems == 1 {
                "problem"
            } else {
                "problems"
            },
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(Issue::line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Check(summary) => print_check(&result.issues, summary),
        CommandSummary::Lookup(summary) => print_lookup(summary, verbose),
        CommandSummary::Contexts(summary) => {
            print_contexts_to(summary, &mut io::stdout().lock());
        }
        CommandSummary::Export(summary) => print_export(summary),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_check(issues: &[Issue], summary: &CheckSummary) {
    report(issues);

    if issues.is_empty() {
        print_success(summary.files_checked);
    }

    print_parse_warning(summary.parse_error_count);
}

fn print_lookup(summary: &LookupSummary, verbose: bool) {
    println!("{}", summary.text);
    if verbose && !summary.translated {
        eprintln!(
            "{} no finished translation, showing the source text",
            "note:".bold()
        );
    }
}

/// Print the context table of a catalog to a custom writer.
pub fn print_contexts_to<W: Write>(summary: &ContextsSummary, writer: &mut W) {
    const HEADER: &str = "Context";

    let name_width = summary
        .rows
        .iter()
        .map(|row| UnicodeWidthStr::width(row.name.as_str()))
        .chain(std::iter::once(HEADER.len()))
        .max()
        .unwrap_or(HEADER.len());

    let _ = writeln!(
        writer,
        "{}{}  {:>8}  {:>10}  {:>8}",
        HEADER.bold(),
        " ".repeat(name_width - HEADER.len()),
        "Finished".bold(),
        "Unfinished".bold(),
        "Vanished".bold()
    );

    let mut messages = 0;
    for row in &summary.rows {
        let padding = name_width - UnicodeWidthStr::width(row.name.as_str());
        let _ = writeln!(
            writer,
            "{}{}  {:>8}  {:>10}  {:>8}",
            row.name,
            " ".repeat(padding),
            row.stats.finished,
            row.stats.unfinished,
            row.stats.vanished
        );
        messages += row.stats.total();
    }

    let contexts = summary.rows.len();
    let language = summary
        .language
        .as_deref()
        .map(|language| format!(" ({})", language))
        .unwrap_or_default();
    let _ = writeln!(
        writer,
        "\n{} {}",
        SUCCESS_MARK.green(),
        format!(
            "{} {}, {} {}{}",
            contexts,
            if contexts == 1 { "context" } else { "contexts" },
            messages,
            if messages == 1 { "message" } else { "messages" },
            language
        )
        .green()
    );
}

fn print_export(summary: &ExportSummary) {
    match &summary.output {
        Some(path) => println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Wrote {}", path.display()).green()
        ),
        None => print!("{}", summary.content),
    }
}

fn print_init(summary: &InitSummary) {
    if let Some(error) = &summary.error {
        eprintln!("{} {}", "Error:".bold().red(), error);
    } else if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
