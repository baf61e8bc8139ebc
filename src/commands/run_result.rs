use crate::issues::Issue;

/// Result of running checks over a translations directory.
#[derive(Debug)]
pub struct RunResult {
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found, sorted by file, line and rule.
    pub issues: Vec<Issue>,
    /// Number of files that failed to load.
    pub parse_error_count: usize,
    /// Number of `.ts` files found, loaded or not.
    pub files_checked: usize,
}
