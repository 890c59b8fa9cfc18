use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use super::http_api::HttpApi;
use crate::config::ApiConfig;
use crate::models::{Credentials, Evaluation, LoginResponse, Snippet, SnippetDraft, SnippetId};

/// Anything that can go wrong talking to the backend.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure, or a body that did not decode.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The backend answered, but not with a 2xx.
    #[error("Unexpected status code: {0}")]
    Status(u16),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(code) => Some(*code),
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// The playground REST backend. Every call is a single best-effort request.
///
/// `token` is sent verbatim as the `Authorization` header, and omitted when `None`.
#[async_trait]
pub trait PlaygroundApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;
    async fn logout(&self, token: &str) -> Result<(), ApiError>;
    async fn list_snippets(&self, token: Option<&str>) -> Result<Vec<Snippet>, ApiError>;
    async fn get_snippet(&self, token: Option<&str>, id: SnippetId) -> Result<Snippet, ApiError>;
    /// Returns the new id when the backend reports one.
    async fn create_snippet(
        &self,
        token: Option<&str>,
        draft: &SnippetDraft,
    ) -> Result<Option<SnippetId>, ApiError>;
    async fn update_snippet(
        &self,
        token: Option<&str>,
        id: SnippetId,
        draft: &SnippetDraft,
    ) -> Result<(), ApiError>;
    async fn delete_snippet(&self, token: Option<&str>, id: SnippetId) -> Result<(), ApiError>;
    async fn run(&self, code: &str) -> Result<Evaluation, ApiError>;
}

/// Creates the backend client for the configured base URL.
pub fn create_api(config: &ApiConfig) -> Arc<dyn PlaygroundApi> {
    info!(
        event_name = "api.client.created",
        event_domain = "api",
        base_url = config.base_url.as_str(),
        "Using playground backend"
    );
    Arc::new(HttpApi::new(config))
}
