use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tscat::mcp::{TscatMcpServer, types::GetConfigParams};

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["translationsDir"], "./i18n");
    assert_eq!(json_result["config"]["sourceLanguage"], "en");
    assert!(json_result["config"]["ignores"].is_array());
    assert!(json_result["config"]["ignoreContexts"].is_array());
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "translationsDir": "ui/i18n",
            "ignoreContexts": ["AndroidAutoScreen"]
        }))
        .unwrap();

    let server = TscatMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["translationsDir"], "ui/i18n");
    assert_eq!(json_result["config"]["ignoreContexts"][0], "AndroidAutoScreen");
    let resolved = json_result["resolvedTranslationsDir"].as_str().unwrap();
    assert!(resolved.starts_with(&fixture.root()));
    assert!(resolved.ends_with("ui/i18n"));
}

#[tokio::test]
async fn test_get_config_invalid_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_ts_file(".tscatrc.json", "{ not json").unwrap();

    let server = TscatMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let err = server.get_config(params).await.unwrap_err();
    assert!(err.message.contains("Failed to load config"));
}
