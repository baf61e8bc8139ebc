use std::collections::BTreeSet;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::{
    catalog::Catalog,
    commands::runner::{CheckRunner, CheckType},
    config::load_config,
    issues::{Issue, Rule},
    rules::parse_error_issue,
};

use super::helpers::{check_context, json_result, paginate, resolve_file};
use super::types::{
    CatalogInfo, CatalogsResult, ConfigDto, ConfigValues, ContextInfo, ContextsResult,
    GetConfigParams, ListCatalogsParams, ListContextsParams, LoadFailure, LookupParams,
    LookupResult, RuleCounts, ScanOverviewParams, ScanOverviewResult, ScanUnfinishedParams,
    UnfinishedItem, UnfinishedScanResult,
};

#[derive(Clone)]
pub struct TscatMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TscatMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TscatMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current tscat configuration
    #[tool(description = "Get the current tscat configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = load_config(std::path::Path::new(&params.0.project_root_path))
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let config_dto = ConfigDto {
            from_file: result.from_file,
            resolved_translations_dir: result.translations_dir().display().to_string(),
            config: ConfigValues::from(result.config),
        };

        json_result(&config_dto)
    }

    /// List translation files with their locale and status counts
    #[tool(
        description = "List all Qt .ts translation files in the project with locale and per-status message counts. Files that fail to load are listed under failures."
    )]
    pub async fn list_catalogs(
        &self,
        params: Parameters<ListCatalogsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = check_context(&params.0.project_root_path)?;
        let scanned = ctx
            .ensure_catalogs()
            .map_err(|e| McpError::internal_error(format!("Scan failed: {:#}", e), None))?;

        let catalogs = scanned
            .catalogs
            .iter()
            .map(|loaded| CatalogInfo {
                file_path: ctx.display_path(&loaded.path),
                locale: loaded.locale.clone(),
                source_language: loaded.catalog.source_language().map(str::to_string),
                context_count: loaded.catalog.contexts().len(),
                counts: loaded.catalog.stats().into(),
            })
            .collect();

        let failures = scanned
            .failures
            .iter()
            .map(|failure| {
                let mut issue = parse_error_issue(failure);
                issue.file_path = ctx.display_path(failure.path());
                LoadFailure::from(issue)
            })
            .collect();

        json_result(&CatalogsResult {
            translations_dir: ctx.translations_dir.display().to_string(),
            catalogs,
            failures,
        })
    }

    /// List the contexts of one translation file
    #[tool(
        description = "List the contexts of one .ts translation file with per-status message counts."
    )]
    pub async fn list_contexts(
        &self,
        params: Parameters<ListContextsParams>,
    ) -> Result<CallToolResult, McpError> {
        let catalog = load_catalog(&params.0.project_root_path, &params.0.file_path)?;

        let contexts = catalog
            .groups()
            .iter()
            .map(|context| ContextInfo {
                name: context.name.clone(),
                counts: context.stats().into(),
            })
            .collect();

        json_result(&ContextsResult {
            file_path: params.0.file_path.clone(),
            language: catalog.language().map(str::to_string),
            contexts,
        })
    }

    /// Resolve a source string the way the application would at runtime
    #[tool(
        description = "Translate a source string using one .ts file. Only finished, non-empty translations are used; otherwise the source string is returned. Pass count for plural (numerus) messages."
    )]
    pub async fn lookup(
        &self,
        params: Parameters<LookupParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let catalog = load_catalog(&params.project_root_path, &params.file_path)?;
        let context = params.context.as_str();
        let source = params.source.as_str();
        let comment = params.comment.as_deref().unwrap_or("");

        let text = match params.count {
            Some(n) => catalog.translate_plural(context, source, comment, n),
            None if comment.is_empty() => catalog.lookup(context, source).to_string(),
            None => catalog.lookup_disambiguated(context, source, comment).to_string(),
        };

        let translated = catalog.live_message(context, source, comment).is_some()
            || (!comment.is_empty() && catalog.live_message(context, source, "").is_some());

        let status = catalog
            .context(context)
            .and_then(|group| {
                group
                    .messages
                    .iter()
                    .find(|m| m.source == source && m.disambiguation() == comment)
            })
            .map(|message| message.status.to_string());

        json_result(&LookupResult {
            text,
            translated,
            status,
        })
    }

    /// Get overview statistics of all translation issues
    #[tool(
        description = "Get statistics of all translation issues (unfinished, empty-translation, placeholder-mismatch, unknown-status, parse-error) without detailed items. Use this first to understand the overall state."
    )]
    pub async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let runner = CheckRunner::new(check_context(&params.0.project_root_path)?).all();
        let result = runner
            .run()
            .map_err(|e| McpError::internal_error(format!("Scan failed: {:#}", e), None))?;

        let mut by_rule = RuleCounts::default();
        for issue in &result.issues {
            match issue.rule() {
                Rule::Unfinished => by_rule.unfinished += 1,
                Rule::EmptyTranslation => by_rule.empty_translation += 1,
                Rule::PlaceholderMismatch => by_rule.placeholder_mismatch += 1,
                Rule::UnknownStatus => by_rule.unknown_status += 1,
                Rule::ParseError => by_rule.parse_error += 1,
            }
        }

        // Map reported file paths back to locales
        let scanned = runner
            .context()
            .ensure_catalogs()
            .map_err(|e| McpError::internal_error(format!("Scan failed: {:#}", e), None))?;
        let unfinished_files: BTreeSet<&str> = result
            .issues
            .iter()
            .filter(|issue| issue.rule() == Rule::Unfinished)
            .map(Issue::file_path)
            .collect();
        let unfinished_locales: BTreeSet<String> = scanned
            .catalogs
            .iter()
            .filter(|loaded| {
                unfinished_files.contains(runner.context().display_path(&loaded.path).as_str())
            })
            .filter_map(|loaded| loaded.locale.clone())
            .collect();

        json_result(&ScanOverviewResult {
            file_count: result.files_checked,
            error_count: result.error_count,
            warning_count: result.warning_count,
            by_rule,
            unfinished_locales: unfinished_locales.into_iter().collect(),
        })
    }

    /// List unfinished entries that still need a translation
    #[tool(
        description = "List live entries still marked unfinished, with context, source and draft translation. Returns paginated list (limit default 20, max 100)."
    )]
    pub async fn scan_unfinished(
        &self,
        params: Parameters<ScanUnfinishedParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let runner =
            CheckRunner::new(check_context(&params.project_root_path)?).add(CheckType::Unfinished);
        let result = runner
            .run()
            .map_err(|e| McpError::internal_error(format!("Scan failed: {:#}", e), None))?;

        let all_items: Vec<UnfinishedItem> = result
            .issues
            .into_iter()
            .filter_map(|issue| match issue {
                Issue::Unfinished(unfinished) => Some(unfinished.into()),
                _ => None,
            })
            .collect();

        let total_count = all_items.len();
        let (items, pagination) = paginate(all_items, params.offset, params.limit);

        json_result(&UnfinishedScanResult {
            total_count,
            items,
            pagination,
        })
    }
}

fn load_catalog(project_root_path: &str, file_path: &str) -> Result<Catalog, McpError> {
    let path = resolve_file(project_root_path, file_path);
    Catalog::load(&path).map_err(|e| McpError::invalid_params(e.to_string(), None))
}

#[tool_handler]
impl ServerHandler for TscatMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "tscat MCP helps AI agents work on Qt Linguist (.ts) translation files.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. list_catalogs - List translation files with locale and status counts\n\
                 3. list_contexts - List the contexts of one translation file\n\
                 4. lookup - Translate a source string as the application would\n\
                 5. scan_overview - Get statistics of all translation issues\n\
                 6. scan_unfinished - Get unfinished entries (paginated)\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_overview to understand the overall state\n\
                 2. Fix parse errors first; broken files hide every other issue\n\
                 3. Then fix empty-translation and placeholder-mismatch errors\n\
                 4. Finally work through scan_unfinished, file by file"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TscatMcpServer::new();
            tracing::debug!("starting MCP server on stdio");
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
