#![allow(dead_code)]

use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use zendesk_mock_core::Group;
use zendesk_mock_server::SampleSite;

pub fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("zendesk_mock_server=debug,zendesk_mock_core=debug"))
            .with_test_writer()
            .try_init();
    });
}

/// Site whose client is rooted at `api/v2`, so paths read like the client's.
pub async fn site() -> SampleSite {
    init_tracing();
    SampleSite::new(Some("api/v2"))
        .await
        .expect("sample site should start")
}

pub fn group_body(name: &str) -> Value {
    json!({ "group": { "name": name } })
}

pub async fn create_group(site: &SampleSite, name: &str) -> Group {
    let response = site
        .client()
        .post(site.url("groups"))
        .json(&group_body(name))
        .send()
        .await
        .expect("request should complete");
    assert_eq!(response.status().as_u16(), 201, "create `{name}`");
    let body: Value = response.json().await.expect("json body");
    serde_json::from_value(body["group"].clone()).expect("group payload")
}

pub async fn get_json(site: &SampleSite, path: &str) -> (u16, Option<Value>) {
    let response = site
        .client()
        .get(site.url(path))
        .send()
        .await
        .expect("request should complete");
    let status = response.status().as_u16();
    let bytes = response.bytes().await.expect("body bytes");
    if bytes.is_empty() {
        (status, None)
    } else {
        (status, Some(serde_json::from_slice(&bytes).expect("json body")))
    }
}

pub fn ids(body: &Value) -> Vec<i64> {
    body["groups"]
        .as_array()
        .expect("groups array")
        .iter()
        .filter_map(|g| g["id"].as_i64())
        .collect()
}
