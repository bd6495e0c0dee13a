use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Site-wide key/value setting; values are arbitrary JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub key: String,
    pub value: serde_json::Value,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub settings: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub settings: BTreeMap<String, serde_json::Value>,
}
