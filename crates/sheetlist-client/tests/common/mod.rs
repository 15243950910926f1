#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;
use sheetlist_client::{Endpoints, MemorySource, RecordClient, TokenManager};
use sheetlist_core::keys;
use std::sync::Arc;

pub const TEST_KEY: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../testdata/service_account_key.pem"
));

pub const ACCESS_TOKEN: &str = "test-access-token";

pub fn credentials_json() -> String {
    json!({
        "type": "service_account",
        "project_id": "groceries-42",
        "client_email": "list-bot@groceries-42.iam.gserviceaccount.com",
        "private_key": TEST_KEY,
    })
    .to_string()
}

pub fn configured_source() -> MemorySource {
    MemorySource::new()
        .with(keys::SERVICE_ACCOUNT_JSON, credentials_json())
        .with(keys::SPREADSHEET_ID, "sheet-1")
}

pub fn token_manager(server: &ServerGuard, source: MemorySource) -> TokenManager {
    TokenManager::new(
        reqwest::Client::new(),
        Arc::new(source),
        Endpoints::rooted_at(&server.url()),
    )
}

pub fn record_client(server: &ServerGuard, source: MemorySource) -> RecordClient {
    RecordClient::new(token_manager(server, source))
}

/// Token endpoint answering with `ACCESS_TOKEN`, expected `hits` times.
pub async fn mock_token(server: &mut ServerGuard, expires_in: i64, hits: usize) -> Mock {
    server
        .mock("POST", "/token")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded(
                "grant_type".into(),
                "urn:ietf:params:oauth:grant-type:jwt-bearer".into(),
            ),
            Matcher::Regex(r"assertion=[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "access_token": ACCESS_TOKEN,
                "expires_in": expires_in,
                "token_type": "Bearer"
            })
            .to_string(),
        )
        .expect(hits)
        .create_async()
        .await
}

pub fn values_path() -> Matcher {
    Matcher::Regex(r"^/spreadsheets/sheet-1/values/Sheet1(!|%21)A(:|%3A)D$".into())
}

pub async fn mock_values(
    server: &mut ServerGuard,
    status: usize,
    body: serde_json::Value,
    hits: usize,
) -> Mock {
    server
        .mock("GET", values_path())
        .match_header("authorization", format!("Bearer {ACCESS_TOKEN}").as_str())
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(hits)
        .create_async()
        .await
}

pub async fn mock_batch_update(
    server: &mut ServerGuard,
    range: &str,
    values: serde_json::Value,
    status: usize,
) -> Mock {
    server
        .mock("POST", "/spreadsheets/sheet-1/values:batchUpdate")
        .match_header("authorization", format!("Bearer {ACCESS_TOKEN}").as_str())
        .match_body(Matcher::Json(json!({
            "valueInputOption": "USER_ENTERED",
            "data": [{ "range": range, "values": values }]
        })))
        .with_status(status)
        .with_body(json!({ "totalUpdatedRows": 1 }).to_string())
        .expect(1)
        .create_async()
        .await
}
