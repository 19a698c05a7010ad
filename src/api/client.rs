//
//  atlassian-cli
//  api/client.rs
//
//  Copyright (c) 2026 Atlassian CLI Contributors. All rights reserved.
//

//! # HTTP Client Wrapper for Atlassian APIs
//!
//! One client serves all four products; only the base URL and the error
//! body format differ per product. The client handles authentication header
//! injection, JSON serialization, and mapping of failure responses into the
//! [`ApiError`] taxonomy. It never retries and never logs response bodies.
//!
//! Response bodies are read as text and deserialized explicitly so that a
//! shape mismatch surfaces as [`ApiError::MalformedPayload`] instead of a
//! generic transport error.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::api::common::ApiError;
use crate::auth::AuthCredential;

/// The Atlassian product a client instance talks to.
///
/// Determines how error response bodies are interpreted; each product wraps
/// its error messages differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Product {
    Jira,
    Confluence,
    Bamboo,
    Bitbucket,
}

impl Product {
    /// Lowercase product name for messages and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Product::Jira => "jira",
            Product::Confluence => "confluence",
            Product::Bamboo => "bamboo",
            Product::Bitbucket => "bitbucket",
        }
    }
}

/// Extracts a human-readable message from a product error body.
///
/// Formats in the wild:
///
/// ```json
/// {"errorMessages": ["..."], "errors": {}}          // Jira
/// {"message": "...", "statusCode": 404}             // Confluence, Bamboo
/// {"errors": [{"message": "..."}]}                  // Bitbucket Server
/// {"type": "error", "error": {"message": "..."}}    // Bitbucket Cloud
/// ```
///
/// Falls back to the raw body when nothing matches.
fn extract_error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = json
            .get("errorMessages")
            .and_then(|m| m.as_array())
            .and_then(|arr| arr.first())
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }

        if let Some(message) = json
            .get("errors")
            .and_then(|e| e.as_array())
            .and_then(|arr| arr.first())
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }

        if let Some(message) = json
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }

        if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }

    body.to_string()
}

/// Maps a non-success HTTP response to a distinct [`ApiError`] variant.
pub fn format_api_error(status: StatusCode, body: &str) -> ApiError {
    let message = extract_error_message(body);
    match status {
        StatusCode::UNAUTHORIZED => ApiError::AuthFailed(message),
        StatusCode::FORBIDDEN => ApiError::Forbidden(message),
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT => ApiError::BadRequest(message),
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
        status if status.is_server_error() => ApiError::ServerError(message),
        status => ApiError::ServerError(format!("unexpected status {status}: {message}")),
    }
}

/// HTTP client bound to one product instance.
///
/// # Example
///
/// ```rust,no_run
/// use atlassian_cli::api::{AtlassianClient, Product};
/// use atlassian_cli::auth::AuthCredential;
///
/// # fn demo() -> Result<(), atlassian_cli::api::common::ApiError> {
/// let client = AtlassianClient::new(Product::Jira, "https://jira.example.com")?
///     .with_auth(AuthCredential::basic("alex", "api-token"));
/// # Ok(())
/// # }
/// ```
pub struct AtlassianClient {
    http: Client,
    product: Product,
    base_url: String,
    auth: Option<AuthCredential>,
}

impl AtlassianClient {
    /// Creates a client for one product at the given base URL.
    ///
    /// The base URL is the instance root (e.g. `https://jira.example.com`);
    /// paths passed to the request methods are appended to it, REST prefix
    /// included.
    pub fn new(product: Product, base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        Ok(Self {
            http: Client::builder()
                .user_agent(format!("atl/{}", crate::VERSION))
                .build()?,
            product,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth: None,
        })
    }

    /// Sets the credentials applied to every request.
    pub fn with_auth(mut self, auth: AuthCredential) -> Self {
        self.auth = Some(auth);
        self
    }

    /// The product this client is bound to.
    pub fn product(&self) -> Product {
        self.product
    }

    /// The instance base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        context: &str,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(format_api_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|source| ApiError::MalformedPayload {
            context: context.to_string(),
            source,
        })
    }

    /// Makes a GET request and deserializes the JSON response.
    ///
    /// `context` names the expected payload for error messages, e.g.
    /// `"Jira issue"`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        context: &str,
    ) -> Result<T, ApiError> {
        debug!(product = self.product.name(), path, "GET");
        let mut request = self.http.get(self.url(path));
        if let Some(auth) = &self.auth {
            request = auth.apply_to_request(request);
        }
        self.handle(request.send().await?, context).await
    }

    /// Makes a POST request with a JSON body and deserializes the response.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: &str,
    ) -> Result<T, ApiError> {
        debug!(product = self.product.name(), path, "POST");
        let mut request = self.http.post(self.url(path)).json(body);
        if let Some(auth) = &self.auth {
            request = auth.apply_to_request(request);
        }
        self.handle(request.send().await?, context).await
    }

    /// Makes a POST request whose success response has no body.
    pub async fn post_no_content<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        debug!(product = self.product.name(), path, "POST");
        let mut request = self.http.post(self.url(path)).json(body);
        if let Some(auth) = &self.auth {
            request = auth.apply_to_request(request);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format_api_error(status, &body));
        }
        Ok(())
    }

    /// Makes a PUT request with a JSON body and deserializes the response.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: &str,
    ) -> Result<T, ApiError> {
        debug!(product = self.product.name(), path, "PUT");
        let mut request = self.http.put(self.url(path)).json(body);
        if let Some(auth) = &self.auth {
            request = auth.apply_to_request(request);
        }
        self.handle(request.send().await?, context).await
    }

    /// Makes a PUT request whose success response has no body.
    pub async fn put_no_content<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        debug!(product = self.product.name(), path, "PUT");
        let mut request = self.http.put(self.url(path)).json(body);
        if let Some(auth) = &self.auth {
            request = auth.apply_to_request(request);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format_api_error(status, &body));
        }
        Ok(())
    }

    /// Makes a DELETE request, ignoring any success body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        debug!(product = self.product.name(), path, "DELETE");
        let mut request = self.http.delete(self.url(path));
        if let Some(auth) = &self.auth {
            request = auth.apply_to_request(request);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format_api_error(status, &body));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Widget {
        name: String,
    }

    #[tokio::test]
    async fn test_get_deserializes_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/api/2/widget")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "gadget"}"#)
            .create_async()
            .await;

        let client = AtlassianClient::new(Product::Jira, server.url()).unwrap();
        let widget: Widget = client.get("/rest/api/2/widget", "widget").await.unwrap();
        assert_eq!(widget.name, "gadget");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_malformed_payload_is_distinct_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/rest/api/2/widget")
            .with_status(200)
            .with_body(r#"{"name": 42}"#)
            .create_async()
            .await;

        let client = AtlassianClient::new(Product::Jira, server.url()).unwrap();
        let result: Result<Widget, ApiError> = client.get("/rest/api/2/widget", "widget").await;
        match result.unwrap_err() {
            ApiError::MalformedPayload { context, .. } => assert_eq!(context, "widget"),
            other => panic!("expected MalformedPayload, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_jira_error_message_extraction() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/rest/api/2/issue/PROJ-404")
            .with_status(404)
            .with_body(r#"{"errorMessages": ["Issue does not exist"], "errors": {}}"#)
            .create_async()
            .await;

        let client = AtlassianClient::new(Product::Jira, server.url()).unwrap();
        let result: Result<Widget, ApiError> =
            client.get("/rest/api/2/issue/PROJ-404", "Jira issue").await;
        match result.unwrap_err() {
            ApiError::NotFound(message) => assert_eq!(message, "Issue does not exist"),
            other => panic!("expected NotFound, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_auth_header_applied() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/api/latest/plan")
            .match_header("authorization", "Bearer secret-token")
            .with_status(200)
            .with_body(r#"{"name": "ok"}"#)
            .create_async()
            .await;

        let client = AtlassianClient::new(Product::Bamboo, server.url())
            .unwrap()
            .with_auth(AuthCredential::bearer("secret-token"));
        let _: Widget = client.get("/rest/api/latest/plan", "plan").await.unwrap();
        mock.assert_async().await;
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            format_api_error(StatusCode::UNAUTHORIZED, "{}"),
            ApiError::AuthFailed(_)
        ));
        assert!(matches!(
            format_api_error(StatusCode::FORBIDDEN, "{}"),
            ApiError::Forbidden(_)
        ));
        assert!(matches!(
            format_api_error(StatusCode::TOO_MANY_REQUESTS, "{}"),
            ApiError::RateLimited
        ));
        assert!(matches!(
            format_api_error(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            ApiError::ServerError(_)
        ));
    }

    #[test]
    fn test_bitbucket_server_error_format() {
        let message = extract_error_message(
            r#"{"errors": [{"message": "Repository not found", "exceptionName": "x"}]}"#,
        );
        assert_eq!(message, "Repository not found");
    }

    #[test]
    fn test_bitbucket_cloud_error_format() {
        let message =
            extract_error_message(r#"{"type": "error", "error": {"message": "No such pipeline"}}"#);
        assert_eq!(message, "No such pipeline");
    }

    #[test]
    fn test_plain_message_and_fallback() {
        assert_eq!(
            extract_error_message(r#"{"message": "Page not found", "statusCode": 404}"#),
            "Page not found"
        );
        assert_eq!(extract_error_message("not json at all"), "not json at all");
    }
}
