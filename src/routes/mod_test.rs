use std::fs;

use reqwest::StatusCode as HttpStatus;
use tempfile::TempDir;

use super::*;
use crate::state::test_helpers::{client, spawn, test_app_state};

fn bundle() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.html"), "<html><body>remindme</body></html>").unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();
    fs::write(dir.path().join("assets").join("app.js"), "console.log('app');").unwrap();
    dir
}

#[tokio::test]
async fn healthz_returns_ok() {
    let dir = bundle();
    let addr = spawn(app(test_app_state(dir.path(), None))).await;

    let resp = client().get(format!("http://{addr}/healthz")).send().await.unwrap();
    assert_eq!(resp.status(), HttpStatus::OK);
}

#[tokio::test]
async fn serves_static_assets() {
    let dir = bundle();
    let addr = spawn(app(test_app_state(dir.path(), None))).await;

    let resp = client().get(format!("http://{addr}/assets/app.js")).send().await.unwrap();
    assert_eq!(resp.status(), HttpStatus::OK);
    assert_eq!(resp.text().await.unwrap(), "console.log('app');");
}

#[tokio::test]
async fn root_serves_index_html() {
    let dir = bundle();
    let addr = spawn(app(test_app_state(dir.path(), None))).await;

    let resp = client().get(format!("http://{addr}/")).send().await.unwrap();
    assert_eq!(resp.status(), HttpStatus::OK);
    assert!(resp.text().await.unwrap().contains("remindme"));
}

#[tokio::test]
async fn client_route_deep_link_falls_back_to_index() {
    let dir = bundle();
    let addr = spawn(app(test_app_state(dir.path(), None))).await;

    let resp = client().get(format!("http://{addr}/contacts")).send().await.unwrap();
    assert_eq!(resp.status(), HttpStatus::OK);
    assert!(resp.text().await.unwrap().contains("remindme"));
}

#[tokio::test]
async fn api_without_upstream_is_unavailable() {
    let dir = bundle();
    let addr = spawn(app(test_app_state(dir.path(), None))).await;

    let resp = client().get(format!("http://{addr}/api/auth/user")).send().await.unwrap();
    assert_eq!(resp.status(), HttpStatus::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "API upstream is not configured");
}

#[tokio::test]
async fn every_api_prefix_is_forwarded_never_served_as_html() {
    let dir = bundle();
    let addr = spawn(app(test_app_state(dir.path(), None))).await;

    for path in ["/api", "/api/", "/api/contacts/"] {
        let resp = client().get(format!("http://{addr}{path}")).send().await.unwrap();
        assert_eq!(resp.status(), HttpStatus::SERVICE_UNAVAILABLE, "{path}");
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "API upstream is not configured", "{path}");
    }
}
