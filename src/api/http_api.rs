use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use tracing::debug;

use super::base::{ApiError, PlaygroundApi};
use crate::config::ApiConfig;
use crate::models::{Credentials, Evaluation, LoginResponse, Snippet, SnippetDraft, SnippetId};

/// `PlaygroundApi` over HTTP with `reqwest`.
pub struct HttpApi {
    pub config: ApiConfig,
    client: Client,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            config: config.clone(),
            client: Client::new(),
        }
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = self.config.url(path);
        debug!(
            event_name = "api.request",
            event_domain = "api",
            method = method.as_str(),
            url = url.as_str(),
            authenticated = token.is_some(),
            "Sending playground request"
        );
        let builder = self.client.request(method, url);
        match token {
            Some(token) => builder.header(AUTHORIZATION, token),
            None => builder,
        }
    }
}

/// Sends the request and turns any non-2xx answer into `ApiError::Status`.
async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder.send().await?;
    let status = response.status();
    debug!(
        event_name = "api.response",
        event_domain = "api",
        status = status.as_u16(),
        url = response.url().as_str(),
        "Received playground response"
    );
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

#[async_trait]
impl PlaygroundApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response = send(self.request(Method::POST, "/api/login", None).json(credentials)).await?;
        Ok(response.json().await?)
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        send(self.request(Method::POST, "/api/logout", Some(token))).await?;
        Ok(())
    }

    async fn list_snippets(&self, token: Option<&str>) -> Result<Vec<Snippet>, ApiError> {
        let response = send(self.request(Method::GET, "/api/snippets", token)).await?;
        Ok(response.json().await?)
    }

    async fn get_snippet(&self, token: Option<&str>, id: SnippetId) -> Result<Snippet, ApiError> {
        let path = format!("/api/snippets/{}", id);
        let response = send(self.request(Method::GET, &path, token)).await?;
        Ok(response.json().await?)
    }

    async fn create_snippet(
        &self,
        token: Option<&str>,
        draft: &SnippetDraft,
    ) -> Result<Option<SnippetId>, ApiError> {
        let response = send(self.request(Method::POST, "/api/snippets", token).json(draft)).await?;
        // Older backends answer with an empty body.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body).ok())
    }

    async fn update_snippet(
        &self,
        token: Option<&str>,
        id: SnippetId,
        draft: &SnippetDraft,
    ) -> Result<(), ApiError> {
        let path = format!("/api/snippets/{}", id);
        send(self.request(Method::PUT, &path, token).json(draft)).await?;
        Ok(())
    }

    async fn delete_snippet(&self, token: Option<&str>, id: SnippetId) -> Result<(), ApiError> {
        let path = format!("/api/snippets/{}", id);
        send(self.request(Method::DELETE, &path, token)).await?;
        Ok(())
    }

    async fn run(&self, code: &str) -> Result<Evaluation, ApiError> {
        let builder = self
            .request(Method::POST, "/api/run", None)
            .header(CONTENT_TYPE, "text/plain")
            .body(code.to_string());
        let response = send(builder).await?;
        Ok(response.json().await?)
    }
}
