//! Integration tests for discovery and liveness routes.

mod helpers;

use http::StatusCode;

use helpers::{StubCmp, StubWeb, TestApp};

#[tokio::test]
async fn test_discovery_lists_every_tool() {
    let app = TestApp::new(StubCmp::new(), StubWeb::new());

    let response = app.request("GET", "/discovery", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let functions = response.body["functions"].as_array().unwrap();
    let names: Vec<&str> = functions
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "get_cmp_root_folders",
            "get_cmp_fields",
            "get_cmp_all_folders",
            "get_cmp_folder_and_its_children",
            "update_asset_folder_location",
            "get_task_brief",
            "validate_assets",
        ]
    );

    for function in functions {
        let name = function["name"].as_str().unwrap();
        assert_eq!(function["endpoint"], format!("/tools/{name}"));
        assert_eq!(function["http_method"], "POST");
        assert_eq!(function["auth_requirements"][0]["provider"], "OptiID");
    }
}

#[tokio::test]
async fn test_discovery_parameters() {
    let app = TestApp::new(StubCmp::new(), StubWeb::new());

    let response = app.request("GET", "/discovery", None).await;

    let validate = &response.body["functions"][6];
    assert_eq!(validate["parameters"][0]["name"], "asset_id");
    assert_eq!(validate["parameters"][1]["name"], "url_column");
    assert_eq!(validate["parameters"][1]["type"], "string");
    assert_eq!(validate["parameters"][1]["required"], true);
    assert_eq!(
        response.body["functions"][0]["parameters"],
        serde_json::json!([])
    );
}

#[tokio::test]
async fn test_status_route() {
    let app = TestApp::new(StubCmp::new(), StubWeb::new());

    let response = app.request("GET", "/_status", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "All Ok! App Running...");
}

#[tokio::test]
async fn test_root_route_points_at_discovery() {
    let app = TestApp::new(StubCmp::new(), StubWeb::new());

    let response = app.request("GET", "/", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("/discovery"));
}
