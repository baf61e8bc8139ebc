//! Issue types for translation file checks.
//!
//! Each issue is self-contained with everything the reporters (CLI, MCP)
//! need to display it: file, line, context, source string and rule.

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    EmptyTranslation,
    PlaceholderMismatch,
    Unfinished,
    UnknownStatus,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::EmptyTranslation => write!(f, "empty-translation"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::UnknownStatus => write!(f, "unknown-status"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Message location
// ============================================================

/// Where a message lives: translation file, line, context and source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryContext {
    pub file_path: String,
    pub line: usize,
    pub context: String,
    pub source: String,
}

impl EntryContext {
    pub fn new(
        file_path: impl Into<String>,
        line: usize,
        context: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            context: context.into(),
            source: source.into(),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Live entry whose translation is still pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub entry: EntryContext,
    /// Draft translation, possibly empty.
    pub translation: String,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Entry marked finished but carrying no translation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTranslationIssue {
    pub entry: EntryContext,
}

impl EmptyTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::EmptyTranslation
    }
}

/// Translation whose place markers (`%1`, `%n`, ...) differ from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub entry: EntryContext,
    pub translation: String,
    /// Markers in the source but not in the translation.
    pub missing: Vec<String>,
    /// Markers in the translation but not in the source.
    pub extra: Vec<String>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// `type` attribute value that is not a known status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatusIssue {
    pub entry: EntryContext,
    pub value: String,
}

impl UnknownStatusIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnknownStatus
    }
}

/// File could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub line: Option<usize>,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found in a translation file.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Unfinished(UnfinishedIssue),
    EmptyTranslation(EmptyTranslationIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    UnknownStatus(UnknownStatusIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    pub fn file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Entry(entry) => &entry.file_path,
            ReportLocation::File { path, .. } => path,
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self.location() {
            ReportLocation::Entry(entry) => Some(entry.line),
            ReportLocation::File { line, .. } => line,
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message inside a translation file.
    Entry(&'a EntryContext),
    /// File-level only (for ParseError).
    File { path: &'a str, line: Option<usize> },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards calls on
/// [`Issue`] to the variant.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (source string or error text).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.translation.is_empty() {
            Some(format!("in {} (no translation yet)", self.entry.context))
        } else {
            Some(format!(
                "in {} (draft: \"{}\")",
                self.entry.context, self.translation
            ))
        }
    }
}

impl Report for EmptyTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("in {}", self.entry.context))
    }

    fn hint(&self) -> Option<&str> {
        Some("add a translation or mark the entry type=\"unfinished\"")
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", self.missing.join(", ")));
        }
        if !self.extra.is_empty() {
            parts.push(format!("unexpected {}", self.extra.join(", ")));
        }
        Some(format!(
            "in {} (\"{}\"): {}",
            self.entry.context,
            self.translation,
            parts.join("; ")
        ))
    }
}

impl Report for UnknownStatusIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in {} (type=\"{}\", treated as unfinished)",
            self.entry.context, self.value
        ))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: self.line,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file path, line, rule, message
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.line().cmp(&other.line()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
