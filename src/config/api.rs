use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where the playground backend lives.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct ApiConfig {
    /// Base URL the `/api/...` paths are appended to, e.g. "http://localhost:3000".
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }
}

impl ApiConfig {
    /// Joins an absolute API path onto the base URL without doubling slashes.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
