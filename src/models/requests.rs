use crate::models::domain::ProfileRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use validator::Validate;

/// Request to score and rank candidate profiles
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreProfilesRequest {
    /// Comma-separated free-text criteria, e.g. "Rust, distributed systems"
    #[validate(length(min = 1))]
    pub criteria: String,
    #[serde(default)]
    pub profiles: Vec<ProfileRecord>,
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    20
}

/// Description of an upstream HTTP request to forward
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RelayRequest {
    #[validate(url)]
    pub url: String,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<Value>,
}

fn default_method() -> String {
    "GET".to_string()
}
