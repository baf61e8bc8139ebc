//! Helper functions shared by the MCP tools.

use std::path::{Path, PathBuf};

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

use super::types::Pagination;
use crate::{cli::CommonArgs, commands::context::CheckContext};

pub const DEFAULT_LIMIT: usize = 20;
pub const MAX_LIMIT: usize = 100;

/// Serialize a tool result as pretty JSON text content.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

pub fn check_context(project_root_path: &str) -> Result<CheckContext, McpError> {
    let args = CommonArgs {
        path: PathBuf::from(project_root_path),
        translations_dir: None,
        verbose: false,
    };
    CheckContext::new(&args)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))
}

/// Resolve a tool's file argument against the project root.
pub fn resolve_file(project_root_path: &str, file_path: &str) -> PathBuf {
    Path::new(project_root_path).join(file_path)
}

/// Apply offset/limit to `items`. `limit` defaults to [`DEFAULT_LIMIT`]
/// and is capped at [`MAX_LIMIT`].
pub fn paginate<T>(
    items: Vec<T>,
    offset: Option<u32>,
    limit: Option<u32>,
) -> (Vec<T>, Pagination) {
    let limit = limit
        .map(|v| v as usize)
        .unwrap_or(DEFAULT_LIMIT)
        .min(MAX_LIMIT);
    let offset = offset.map(|v| v as usize).unwrap_or(0);
    let total_count = items.len();

    let page: Vec<T> = items.into_iter().skip(offset).take(limit).collect();
    let has_more = offset + page.len() < total_count;

    (
        page,
        Pagination {
            offset,
            limit,
            has_more,
        },
    )
}
