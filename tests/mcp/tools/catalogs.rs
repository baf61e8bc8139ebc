use rmcp::handler::server::wrapper::Parameters;
use tscat::mcp::{
    TscatMcpServer,
    types::{ListCatalogsParams, ListContextsParams},
};

use crate::{McpTestFixture, UI_DE, extract_tool_result_json, fixture_de_fr};

// ============================================================================
// list_catalogs tests
// ============================================================================

#[tokio::test]
async fn test_list_catalogs() {
    let fixture = fixture_de_fr().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(ListCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.list_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let catalogs = json_result["catalogs"].as_array().unwrap();
    assert_eq!(catalogs.len(), 2);

    // Sorted by path
    assert_eq!(catalogs[0]["filePath"], "i18n/ui_de.ts");
    assert_eq!(catalogs[0]["locale"], "de_DE");
    assert_eq!(catalogs[0]["contextCount"], 2);
    assert_eq!(catalogs[0]["counts"]["finished"], 2);
    assert_eq!(catalogs[0]["counts"]["unfinished"], 2);
    assert_eq!(catalogs[0]["counts"]["vanished"], 1);

    assert_eq!(catalogs[1]["filePath"], "i18n/ui_fr.ts");
    assert_eq!(catalogs[1]["locale"], "fr_FR");
    assert!(json_result["failures"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_catalogs_reports_failures() {
    let fixture =
        McpTestFixture::with_catalogs(&[("ui_de.ts", UI_DE), ("ui_pl.ts", "<TS><context>")])
            .unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(ListCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.list_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["catalogs"].as_array().unwrap().len(), 1);
    let failures = json_result["failures"].as_array().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0]["filePath"], "i18n/ui_pl.ts");
    assert!(failures[0]["line"].is_u64());
    assert!(!failures[0]["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_catalogs_locale_from_file_name() {
    let fixture = McpTestFixture::with_catalogs(&[(
        "ui_es_419.ts",
        "<TS version=\"2.1\"><context><name>Strings</name></context></TS>",
    )])
    .unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(ListCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.list_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["catalogs"][0]["locale"], "es_419");
}

#[tokio::test]
async fn test_list_catalogs_missing_dir() {
    let fixture = McpTestFixture::new().unwrap();
    std::fs::remove_dir(fixture.root_path().join("i18n")).unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(ListCatalogsParams {
        project_root_path: fixture.root(),
    });

    let err = server.list_catalogs(params).await.unwrap_err();
    assert!(err.message.contains("does not exist"));
}

// ============================================================================
// list_contexts tests
// ============================================================================

#[tokio::test]
async fn test_list_contexts() {
    let fixture = fixture_de_fr().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(ListContextsParams {
        project_root_path: fixture.root(),
        file_path: "i18n/ui_de.ts".to_string(),
    });

    let result = server.list_contexts(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["filePath"], "i18n/ui_de.ts");
    assert_eq!(json_result["language"], "de_DE");

    let contexts = json_result["contexts"].as_array().unwrap();
    let names: Vec<&str> = contexts
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["AndroidAutoScreen", "Strings"]);
    assert_eq!(contexts[0]["counts"]["vanished"], 1);
    assert_eq!(contexts[1]["counts"]["finished"], 2);
    assert_eq!(contexts[1]["counts"]["unfinished"], 2);
}

#[tokio::test]
async fn test_list_contexts_missing_file() {
    let fixture = fixture_de_fr().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(ListContextsParams {
        project_root_path: fixture.root(),
        file_path: "i18n/ui_ja.ts".to_string(),
    });

    let err = server.list_contexts(params).await.unwrap_err();
    assert!(err.message.contains("ui_ja.ts"));
}
