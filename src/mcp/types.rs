use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::CatalogStats,
    issues::{ParseErrorIssue, UnfinishedIssue},
};

// ============================================================
// Tool Parameters
// ============================================================

/// Parameters of tools that work on a whole project.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectParams {
    /// Absolute path of the project root (where .tscatrc.json lives)
    pub project_root_path: String,
}

pub type GetConfigParams = ProjectParams;
pub type ListCatalogsParams = ProjectParams;
pub type ScanOverviewParams = ProjectParams;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListContextsParams {
    pub project_root_path: String,
    /// Translation file, relative to the project root or absolute
    pub file_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupParams {
    pub project_root_path: String,
    /// Translation file, relative to the project root or absolute
    pub file_path: String,
    /// Context name, e.g. "Strings"
    pub context: String,
    /// Source string to translate
    pub source: String,
    /// Disambiguation comment
    #[serde(default)]
    pub comment: Option<String>,
    /// Count for plural forms; %n is replaced by it
    #[serde(default)]
    pub count: Option<u64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanUnfinishedParams {
    pub project_root_path: String,
    /// Maximum number of items (default 20, max 100)
    #[serde(default)]
    pub limit: Option<u32>,
    /// Number of items to skip (default 0)
    #[serde(default)]
    pub offset: Option<u32>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    /// Translations directory resolved against the config location
    pub resolved_translations_dir: String,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub translations_dir: String,
    pub ignores: Vec<String>,
    pub ignore_contexts: Vec<String>,
    pub source_language: String,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            translations_dir: c.translations_dir,
            ignores: c.ignores,
            ignore_contexts: c.ignore_contexts,
            source_language: c.source_language,
        }
    }
}

// ============================================================
// Catalog Types (list_catalogs, list_contexts)
// ============================================================

/// Per-status message counts.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub finished: usize,
    pub unfinished: usize,
    pub vanished: usize,
}

impl From<CatalogStats> for StatusCounts {
    fn from(stats: CatalogStats) -> Self {
        Self {
            finished: stats.finished,
            unfinished: stats.unfinished,
            vanished: stats.vanished,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    pub file_path: String,
    /// From the `language` attribute, or the file name suffix
    pub locale: Option<String>,
    pub source_language: Option<String>,
    pub context_count: usize,
    pub counts: StatusCounts,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoadFailure {
    pub file_path: String,
    pub line: Option<usize>,
    pub error: String,
}

impl From<ParseErrorIssue> for LoadFailure {
    fn from(issue: ParseErrorIssue) -> Self {
        Self {
            file_path: issue.file_path,
            line: issue.line,
            error: issue.error,
        }
    }
}

/// Result of list_catalogs operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogsResult {
    pub translations_dir: String,
    pub catalogs: Vec<CatalogInfo>,
    /// Files that could not be loaded
    pub failures: Vec<LoadFailure>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContextInfo {
    pub name: String,
    pub counts: StatusCounts,
}

/// Result of list_contexts operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContextsResult {
    pub file_path: String,
    pub language: Option<String>,
    pub contexts: Vec<ContextInfo>,
}

// ============================================================
// Lookup Types (lookup)
// ============================================================

/// Result of lookup operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    /// Translation, or the source string when none is usable
    pub text: String,
    /// False when the source string was returned as fallback
    pub translated: bool,
    /// Status of the first matching entry in the file, if any
    pub status: Option<String>,
}

// ============================================================
// Scan Types (scan_overview, scan_unfinished)
// ============================================================

#[derive(Debug, Default, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleCounts {
    pub unfinished: usize,
    pub empty_translation: usize,
    pub placeholder_mismatch: usize,
    pub unknown_status: usize,
    pub parse_error: usize,
}

/// Result of scan_overview operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub file_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub by_rule: RuleCounts,
    /// Locales with at least one unfinished entry, sorted
    pub unfinished_locales: Vec<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnfinishedItem {
    pub file_path: String,
    pub line: usize,
    pub context: String,
    pub source: String,
    /// Draft translation, possibly empty
    pub translation: String,
}

impl From<UnfinishedIssue> for UnfinishedItem {
    fn from(issue: UnfinishedIssue) -> Self {
        Self {
            file_path: issue.entry.file_path,
            line: issue.entry.line,
            context: issue.entry.context,
            source: issue.entry.source,
            translation: issue.translation,
        }
    }
}

/// Result of scan_unfinished operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnfinishedScanResult {
    pub total_count: usize,
    pub items: Vec<UnfinishedItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
