use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tscat::mcp::{
    TscatMcpServer,
    types::{ScanOverviewParams, ScanUnfinishedParams},
};

use crate::{
    McpTestFixture, UI_DE, assert_pagination, extract_tool_result_json, fixture_de_fr,
    fixture_many_unfinished,
};

// ============================================================================
// scan_overview tests
// ============================================================================

#[tokio::test]
async fn test_scan_overview() {
    let fixture = fixture_de_fr().unwrap();
    fixture
        .write_ts_file(
            "i18n/ui_nl.ts",
            r#"<TS version="2.1" language="nl_NL">
<context>
    <name>Strings</name>
    <message>
        <source>Back</source>
        <translation></translation>
    </message>
    <message>
        <source>Track %1 of %2</source>
        <translation>Nummer %1</translation>
    </message>
</context>
</TS>
"#,
        )
        .unwrap();
    fixture
        .write_ts_file("i18n/ui_pl.ts", "<TS><context>")
        .unwrap();

    let server = TscatMcpServer::new();
    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fileCount"], 4);
    assert_eq!(json_result["errorCount"], 3);
    assert_eq!(json_result["warningCount"], 2);
    assert_eq!(
        json_result["byRule"],
        json!({
            "unfinished": 2,
            "emptyTranslation": 1,
            "placeholderMismatch": 1,
            "unknownStatus": 0,
            "parseError": 1
        })
    );
    assert_eq!(json_result["unfinishedLocales"], json!(["de_DE"]));
}

#[tokio::test]
async fn test_scan_overview_respects_ignore_contexts() {
    let fixture = fixture_de_fr().unwrap();
    fixture
        .write_config(&json!({ "ignoreContexts": ["Strings"] }))
        .unwrap();

    let server = TscatMcpServer::new();
    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["warningCount"], 0);
    assert_eq!(json_result["unfinishedLocales"], json!([]));
}

// ============================================================================
// scan_unfinished tests
// ============================================================================

#[tokio::test]
async fn test_scan_unfinished_items() {
    let fixture = McpTestFixture::with_catalogs(&[("ui_de.ts", UI_DE)]).unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(ScanUnfinishedParams {
        project_root_path: fixture.root(),
        limit: None,
        offset: None,
    });

    let result = server.scan_unfinished(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 2);
    assert_pagination(&json_result, 0, 20, false);

    let items = json_result["items"].as_array().unwrap();
    assert_eq!(
        items[0],
        json!({
            "filePath": "i18n/ui_de.ts",
            "line": 17,
            "context": "Strings",
            "source": "Tools",
            "translation": ""
        })
    );
    assert_eq!(items[1]["source"], "Language");
    assert_eq!(items[1]["translation"], "Sprache");
}

#[tokio::test]
async fn test_scan_unfinished_pagination() {
    let fixture = fixture_many_unfinished(25).unwrap();
    let server = TscatMcpServer::new();

    let first = server
        .scan_unfinished(Parameters(ScanUnfinishedParams {
            project_root_path: fixture.root(),
            limit: Some(10),
            offset: None,
        }))
        .await
        .unwrap();
    let first = extract_tool_result_json(&first);
    assert_eq!(first["totalCount"], 25);
    assert_eq!(first["items"].as_array().unwrap().len(), 10);
    assert_eq!(first["items"][0]["source"], "Label 0");
    assert_pagination(&first, 0, 10, true);

    let last = server
        .scan_unfinished(Parameters(ScanUnfinishedParams {
            project_root_path: fixture.root(),
            limit: Some(10),
            offset: Some(20),
        }))
        .await
        .unwrap();
    let last = extract_tool_result_json(&last);
    assert_eq!(last["items"].as_array().unwrap().len(), 5);
    assert_eq!(last["items"][0]["source"], "Label 20");
    assert_pagination(&last, 20, 10, false);
}

#[tokio::test]
async fn test_scan_unfinished_limit_capped() {
    let fixture = fixture_many_unfinished(3).unwrap();
    let server = TscatMcpServer::new();

    let result = server
        .scan_unfinished(Parameters(ScanUnfinishedParams {
            project_root_path: fixture.root(),
            limit: Some(1000),
            offset: None,
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_pagination(&json_result, 0, 100, false);
}
