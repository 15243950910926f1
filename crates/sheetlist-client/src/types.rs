use serde::{Deserialize, Serialize};
use serde_json::Value;
use sheetlist_core::RowCells;

#[derive(Serialize)]
pub struct TokenRequest<'a> {
    pub grant_type: &'a str,
    pub assertion: &'a str,
}

#[derive(Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

#[derive(Deserialize, Default)]
pub struct ValueRangeResponse {
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateRequest {
    pub value_input_option: &'static str,
    pub data: Vec<ValueRangeUpdate>,
}

#[derive(Serialize)]
pub struct ValueRangeUpdate {
    pub range: String,
    pub values: Vec<RowCells>,
}
