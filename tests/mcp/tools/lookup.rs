use rmcp::handler::server::wrapper::Parameters;
use serde_json::Value;
use tscat::mcp::{TscatMcpServer, types::LookupParams};

use crate::{McpTestFixture, extract_tool_result_json, fixture_de_fr};

fn params(
    fixture: &McpTestFixture,
    context: &str,
    source: &str,
    comment: Option<&str>,
    count: Option<u64>,
) -> Parameters<LookupParams> {
    Parameters(LookupParams {
        project_root_path: fixture.root(),
        file_path: "i18n/ui_de.ts".to_string(),
        context: context.to_string(),
        source: source.to_string(),
        comment: comment.map(str::to_string),
        count,
    })
}

async fn lookup(params: Parameters<LookupParams>) -> Value {
    let server = TscatMcpServer::new();
    let result = server.lookup(params).await.unwrap();
    extract_tool_result_json(&result)
}

#[tokio::test]
async fn test_lookup_finished() {
    let fixture = fixture_de_fr().unwrap();

    let json_result = lookup(params(&fixture, "Strings", "Available", None, None)).await;

    assert_eq!(json_result["text"], "Verfügbar");
    assert_eq!(json_result["translated"], true);
    assert_eq!(json_result["status"], "finished");
}

#[tokio::test]
async fn test_lookup_unfinished_returns_source() {
    let fixture = fixture_de_fr().unwrap();

    // Draft text is never returned
    let json_result = lookup(params(&fixture, "Strings", "Language", None, None)).await;

    assert_eq!(json_result["text"], "Language");
    assert_eq!(json_result["translated"], false);
    assert_eq!(json_result["status"], "unfinished");
}

#[tokio::test]
async fn test_lookup_vanished_returns_source() {
    let fixture = fixture_de_fr().unwrap();

    let json_result = lookup(params(&fixture, "AndroidAutoScreen", "Connected", None, None)).await;

    assert_eq!(json_result["text"], "Connected");
    assert_eq!(json_result["translated"], false);
    assert_eq!(json_result["status"], "vanished");
}

#[tokio::test]
async fn test_lookup_unknown_entry() {
    let fixture = fixture_de_fr().unwrap();

    let json_result = lookup(params(&fixture, "Strings", "Settings", None, None)).await;

    assert_eq!(json_result["text"], "Settings");
    assert_eq!(json_result["translated"], false);
    assert!(json_result["status"].is_null());
}

#[tokio::test]
async fn test_lookup_plural() {
    let fixture = fixture_de_fr().unwrap();

    let one = lookup(params(&fixture, "Strings", "%n device(s)", None, Some(1))).await;
    let many = lookup(params(&fixture, "Strings", "%n device(s)", None, Some(5))).await;

    assert_eq!(one["text"], "1 Gerät");
    assert_eq!(many["text"], "5 Geräte");
    assert_eq!(many["translated"], true);
}

#[tokio::test]
async fn test_lookup_comment_falls_back_to_plain_entry() {
    let fixture = fixture_de_fr().unwrap();

    let json_result = lookup(params(&fixture, "Strings", "Available", Some("status"), None)).await;

    assert_eq!(json_result["text"], "Verfügbar");
    assert_eq!(json_result["translated"], true);
}

#[tokio::test]
async fn test_lookup_parse_error_is_invalid_params() {
    let fixture = McpTestFixture::with_catalogs(&[("ui_de.ts", "<resources/>")]).unwrap();
    let server = TscatMcpServer::new();

    let err = server
        .lookup(params(&fixture, "Strings", "Available", None, None))
        .await
        .unwrap_err();
    assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("<resources>"));
}
