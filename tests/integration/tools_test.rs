//! Integration tests for tool invocation.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};

use helpers::{StubCmp, StubWeb, TestApp};

fn folder(id: &str, parent: Option<&str>) -> Value {
    json!({ "id": id, "name": format!("Folder {id}"), "parent_folder_id": parent })
}

fn library() -> StubCmp {
    StubCmp::new().with_listing(
        "/v3/folders",
        vec![
            folder("A", None),
            folder("B", Some("A")),
            folder("C", Some("B")),
            folder("D", None),
            folder("X", Some("missing")),
        ],
    )
}

#[tokio::test]
async fn test_root_folders_across_pages() {
    let app = TestApp::new(library(), StubWeb::new());

    let response = app.call_tool("get_cmp_root_folders", json!({})).await;

    assert_eq!(response.status, StatusCode::OK);
    let ids: Vec<&str> = response.body["folders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["A", "D"]);
    // Five records at page size two: 2 + 2 + 1.
    assert_eq!(app.cmp.calls_to("/v3/folders"), 3);
}

#[tokio::test]
async fn test_all_folders_nested_and_orphans_dropped() {
    let app = TestApp::new(library(), StubWeb::new());

    let response = app.call_tool("get_cmp_all_folders", json!({})).await;

    assert_eq!(response.status, StatusCode::OK);
    let folders = &response.body["folders"];
    assert_eq!(folders.as_array().unwrap().len(), 2);
    assert_eq!(folders[0]["id"], "A");
    assert_eq!(folders[0]["children"][0]["id"], "B");
    assert_eq!(folders[0]["children"][0]["children"][0]["id"], "C");
    assert_eq!(folders[0]["children"][0]["children"][0]["children"], json!([]));
    assert_eq!(folders[1]["id"], "D");
    assert!(!response.text.contains("\"X\""));
}

#[tokio::test]
async fn test_folder_and_its_children_follows_links() {
    let cmp = StubCmp::new()
        .with_document(
            "/v3/folders/A",
            json!({
                "id": "A",
                "name": "Campaigns",
                "parent_folder_id": null,
                "links": { "children": "/v3/folders/A/children" }
            }),
        )
        .with_listing(
            "/v3/folders/A/children",
            vec![
                json!({
                    "id": "B",
                    "name": "2024",
                    "parent_folder_id": "A",
                    "links": { "children": "/v3/folders/B/children" }
                }),
                json!({ "id": "E", "name": "Archive", "parent_folder_id": "A" }),
            ],
        )
        .with_listing("/v3/folders/B/children", vec![folder("C", Some("B"))]);
    let app = TestApp::new(cmp, StubWeb::new());

    let response = app
        .call_tool("get_cmp_folder_and_its_children", json!({ "folder_id": "A" }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let root = &response.body["folder"];
    assert_eq!(root["name"], "Campaigns");
    assert_eq!(root["children"][0]["children"][0]["id"], "C");
    assert_eq!(root["children"][1]["children"], json!([]));
}

#[tokio::test]
async fn test_fields_listing() {
    let cmp = StubCmp::new().with_listing(
        "/v3/fields",
        vec![
            json!({ "id": "f1", "name": "Title", "type": "text" }),
            json!({ "id": "f2", "name": "Region", "type": "choice" }),
            json!({ "id": "f3", "name": "Launch", "type": "date" }),
        ],
    );
    let app = TestApp::new(cmp, StubWeb::new());

    let response = app.call_tool("get_cmp_fields", json!({})).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["fields"].as_array().unwrap().len(), 3);
    assert_eq!(response.body["fields"][2]["id"], "f3");
}

#[tokio::test]
async fn test_missing_parameter_is_bad_request() {
    let app = TestApp::new(library(), StubWeb::new());

    let response = app
        .call_tool("get_cmp_folder_and_its_children", json!({}))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Missing required parameter: folder_id"
    );
    assert_eq!(app.cmp.calls.lock().unwrap().len(), 0);
}

#[tokio::test]
async fn test_unknown_tool_is_not_found() {
    let app = TestApp::new(library(), StubWeb::new());

    let response = app.call_tool("delete_library", json!({})).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Unknown tool: delete_library");
}

#[tokio::test]
async fn test_no_credentials_is_unauthorized() {
    let app = TestApp::new(library(), StubWeb::new());

    let response = app
        .request(
            "POST",
            "/tools/get_cmp_root_folders",
            Some(json!({ "parameters": {} })),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.cmp.calls.lock().unwrap().len(), 0);
}

#[tokio::test]
async fn test_client_credentials_fallback() {
    let app = TestApp::with_client_credentials(library(), StubWeb::new());

    let response = app
        .request("POST", "/tools/get_cmp_root_folders", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let calls = app.cmp.calls.lock().unwrap();
    assert!(calls.iter().all(|(_, who)| who == "client-credentials"));
}

#[tokio::test]
async fn test_forwarded_token_is_used_for_every_call() {
    let app = TestApp::with_client_credentials(library(), StubWeb::new());

    let response = app.call_tool("get_cmp_all_folders", json!({})).await;

    assert_eq!(response.status, StatusCode::OK);
    let calls = app.cmp.calls.lock().unwrap();
    assert!(!calls.is_empty());
    assert!(calls.iter().all(|(_, who)| who == "caller-token"));
}

#[tokio::test]
async fn test_task_brief_present_and_absent() {
    let cmp = StubCmp::new()
        .with_document(
            "/v3/tasks/t-1/brief",
            json!({ "title": "Spring launch", "fields": [{ "name": "Audience" }] }),
        )
        .with_document("/v3/tasks/t-2/brief", json!({}));
    let app = TestApp::new(cmp, StubWeb::new());

    let present = app
        .call_tool("get_task_brief", json!({ "task_id": "t-1" }))
        .await;
    assert_eq!(present.status, StatusCode::OK);
    assert_eq!(present.body["brief"]["title"], "Spring launch");

    let empty = app
        .call_tool("get_task_brief", json!({ "task_id": "t-2" }))
        .await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(
        empty.body,
        json!({ "message": "No brief available for this task." })
    );

    let missing = app
        .call_tool("get_task_brief", json!({ "task_id": "t-3" }))
        .await;
    assert_eq!(missing.status, StatusCode::OK);
    assert_eq!(
        missing.body["message"],
        "No brief available for this task."
    );
}

#[tokio::test]
async fn test_update_asset_folder_location() {
    let cmp = StubCmp::new().with_document(
        "/v3/images/img-7",
        json!({ "id": "img-7", "title": "hero.png", "folder_id": "old" }),
    );
    let app = TestApp::new(cmp, StubWeb::new());

    let response = app
        .call_tool(
            "update_asset_folder_location",
            json!({ "asset_id": "img-7", "folder_id": "F-9" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["image"]["folder_id"], "F-9");
    let patches = app.cmp.patches.lock().unwrap();
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].0, "/v3/images/img-7");
    assert_eq!(patches[0].1, json!({ "folder_id": "F-9" }));
}

#[tokio::test]
async fn test_remote_failure_is_reported_generically() {
    let cmp = StubCmp::new().failing_on("/v3/fields");
    let app = TestApp::new(cmp, StubWeb::new());

    let response = app.call_tool("get_cmp_fields", json!({})).await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.body["message"], "Failed to fetch CMP fields");
    assert!(!response.text.contains("503"));
}

#[tokio::test]
async fn test_validate_assets_end_to_end() {
    let sheet = "Title,Public URL\n\
                 Hero,https://cdn.test/hero.png\n\
                 Hero again,https://mirror.test/img/hero.png\n\
                 Empty,https://cdn.test/empty.png\n\
                 Note,not a url\n\
                 Gone,https://cdn.test/gone.png\n";
    let cmp = StubCmp::new().with_document(
        "/v3/raw-files/sheet-1",
        json!({ "id": "sheet-1", "url": "https://files.test/sheet-1.csv" }),
    );
    let web = StubWeb::new()
        .with_download("https://files.test/sheet-1.csv", sheet)
        .with_asset("https://cdn.test/hero.png", Some(2048), "image/png")
        .with_asset("https://mirror.test/img/hero.png", Some(2048), "image/png")
        .with_asset("https://cdn.test/empty.png", Some(0), "image/png");
    let app = TestApp::new(cmp, web);

    let response = app
        .call_tool(
            "validate_assets",
            json!({ "asset_id": "sheet-1", "url_column": "Public URL" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = &response.body;
    assert_eq!(body["status"], "SUCCESS");
    assert_eq!(
        body["summary"],
        json!({ "total_assets": 4, "valid_assets": 1, "invalid_assets": 3 })
    );

    let results = body["results"].as_array().unwrap();
    assert_eq!(results[0]["status"], "VALID");
    assert_eq!(results[0]["filename"], "hero.png");
    assert_eq!(results[1]["validation_reasons"], json!(["DUPLICATE"]));
    assert_eq!(results[2]["validation_reasons"], json!(["ZERO_BYTE_FILE"]));
    assert_eq!(results[3]["validation_reasons"], json!(["UNKNOWN_FILE_SIZE"]));
    assert_eq!(results[3]["size_bytes"], Value::Null);
}

#[tokio::test]
async fn test_validate_assets_reports_cause() {
    let cmp = StubCmp::new().with_document("/v3/raw-files/sheet-2", json!({ "id": "sheet-2" }));
    let app = TestApp::new(cmp, StubWeb::new());

    let response = app
        .call_tool(
            "validate_assets",
            json!({ "asset_id": "sheet-2", "url_column": "url" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body["message"],
        "validate_assets failed: Asset sheet-2 has no download URL"
    );
}
