use std::path::PathBuf;

use crate::{catalog::CatalogStats, cli::ExitStatus, issues::Issue};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Lookup(LookupSummary),
    Contexts(ContextsSummary),
    Export(ExportSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    /// Number of `.ts` files found, loaded or not.
    pub files_checked: usize,
    /// Number of files that failed to load.
    pub parse_error_count: usize,
}

#[derive(Debug)]
pub struct LookupSummary {
    pub text: String,
    /// False when no finished translation exists and the source was returned.
    pub translated: bool,
}

#[derive(Debug)]
pub struct ContextRow {
    pub name: String,
    pub stats: CatalogStats,
}

#[derive(Debug)]
pub struct ContextsSummary {
    pub language: Option<String>,
    pub rows: Vec<ContextRow>,
}

#[derive(Debug)]
pub struct ExportSummary {
    /// Serialized catalog; printed when `output` is `None`.
    pub content: String,
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running tscat commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// Issues found by `check`; empty for other commands.
    pub issues: Vec<Issue>,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::from_error_count(self.error_count)
    }
}
