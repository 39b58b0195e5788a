//! HTTP client for the blood-donation backend
//!
//! Every outbound call goes through [`ApiClient::request`], which attaches
//! the bearer credential, normalizes error bodies and purges the local
//! session when the backend rejects the credential.

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::storage::{CURRENT_USER_KEY, SessionStore, TOKEN_KEY, remove_or_warn};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

/// Method, query and body of a single request
#[derive(Debug)]
pub struct RequestOptions<'a, B: ?Sized = ()> {
    method: Method,
    query: Vec<(&'static str, String)>,
    body: Option<&'a B>,
}

impl RequestOptions<'static, ()> {
    pub fn get() -> Self {
        Self::bodyless(Method::GET)
    }

    pub fn delete() -> Self {
        Self::bodyless(Method::DELETE)
    }

    pub fn bodyless(method: Method) -> Self {
        Self {
            method,
            query: Vec::new(),
            body: None,
        }
    }
}

impl<'a, B: Serialize + ?Sized> RequestOptions<'a, B> {
    pub fn with_body(method: Method, body: &'a B) -> Self {
        Self {
            method,
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn post(body: &'a B) -> Self {
        Self::with_body(Method::POST, body)
    }

    pub fn put(body: &'a B) -> Self {
        Self::with_body(Method::PUT, body)
    }

    /// Append a query parameter
    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Append several query parameters
    pub fn query_pairs(mut self, pairs: impl IntoIterator<Item = (&'static str, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }
}

/// Network HTTP client
///
/// Cheap to share behind an `Arc`; the only mutable state is the cached
/// credential.
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
    store: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Create a client and pick up any persisted credential
    pub fn new(config: &ClientConfig, store: Arc<dyn SessionStore>) -> ApiResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let token = store.get(TOKEN_KEY);
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: RwLock::new(token),
            store,
        })
    }

    /// Base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current in-memory credential
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    pub(crate) fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    /// Re-read the persisted credential so external changes apply
    fn refresh_token(&self) -> Option<String> {
        let token = self.store.get(TOKEN_KEY);
        self.set_token(token.clone());
        token
    }

    /// Drop the credential and the cached identity
    fn purge_session(&self) {
        tracing::warn!("Authentication rejected by backend, clearing local session");
        self.set_token(None);
        remove_or_warn(self.store(), TOKEN_KEY);
        remove_or_warn(self.store(), CURRENT_USER_KEY);
    }

    /// Issue a request and decode the JSON response
    pub async fn request<T, B>(&self, endpoint: &str, options: RequestOptions<'_, B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let token = self.refresh_token();
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(method = %options.method, %url, authenticated = token.is_some(), "API request");

        let mut req = self
            .client
            .request(options.method, &url)
            .header(ACCEPT, "application/json");
        if let Some(token) = token {
            req = req.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if !options.query.is_empty() {
            req = req.query(&options.query);
        }
        if let Some(body) = options.body {
            req = req.json(body);
        }

        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ApiResult<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body = serde_json::from_slice::<Value>(&bytes)
                .unwrap_or_else(|_| Value::Object(Default::default()));
            tracing::debug!(status = status.as_u16(), %body, "API error response");

            if is_auth_failure(status, &body) {
                self.purge_session();
                return Err(ApiError::AuthenticationRequired);
            }
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    // ========== Verbs ==========

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.request(endpoint, RequestOptions::get()).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(endpoint, RequestOptions::post(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(endpoint, RequestOptions::put(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.request(endpoint, RequestOptions::delete()).await
    }

    pub async fn delete_with_body<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(endpoint, RequestOptions::with_body(Method::DELETE, body))
            .await
    }
}

/// 401, or FastAPI's "Not authenticated" detail (sent with 403 when the
/// bearer header is missing)
fn is_auth_failure(status: StatusCode, body: &Value) -> bool {
    if status == StatusCode::UNAUTHORIZED {
        return true;
    }
    body.get("detail")
        .and_then(Value::as_str)
        .is_some_and(|detail| detail.contains("Not authenticated"))
}

/// First non-empty of `detail`, `message`, `error`; else a generic status message
fn error_message(status: StatusCode, body: &Value) -> String {
    ["detail", "message", "error"]
        .iter()
        .filter_map(|field| body.get(*field))
        .find(|v| is_present(v))
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()))
}

/// Null, `false`, `0` and `""` carry no message
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64() != Some(0.0),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_auth_failure_detection() {
        assert!(is_auth_failure(StatusCode::UNAUTHORIZED, &json!({})));
        assert!(is_auth_failure(
            StatusCode::FORBIDDEN,
            &json!({ "detail": "Not authenticated" })
        ));
        assert!(!is_auth_failure(
            StatusCode::FORBIDDEN,
            &json!({ "detail": "Not enough permissions" })
        ));
        assert!(!is_auth_failure(StatusCode::BAD_REQUEST, &json!({ "detail": ["x"] })));
    }

    #[test]
    fn test_error_message_priority() {
        let status = StatusCode::BAD_REQUEST;
        assert_eq!(
            error_message(status, &json!({ "detail": "a", "message": "b", "error": "c" })),
            "a"
        );
        assert_eq!(error_message(status, &json!({ "message": "b", "error": "c" })), "b");
        assert_eq!(error_message(status, &json!({ "error": "c" })), "c");
        assert_eq!(error_message(status, &json!({})), "HTTP error! status: 400");
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, &json!({ "detail": null })),
            "HTTP error! status: 500"
        );
    }

    #[test]
    fn test_error_message_skips_empty_fields() {
        let status = StatusCode::BAD_REQUEST;
        assert_eq!(error_message(status, &json!({ "detail": "", "message": "b" })), "b");
        assert_eq!(error_message(status, &json!({ "detail": "" })), "HTTP error! status: 400");
        assert_eq!(
            error_message(status, &json!({ "detail": false, "message": 0, "error": "c" })),
            "c"
        );
        assert_eq!(error_message(status, &json!({ "detail": 0.0 })), "HTTP error! status: 400");
        assert_eq!(error_message(status, &json!({ "detail": 42 })), "42");
    }

    #[test]
    fn test_error_message_structured_detail() {
        let body = json!({ "detail": [{ "loc": ["body", "email"], "msg": "field required" }] });
        let message = error_message(StatusCode::UNPROCESSABLE_ENTITY, &body);
        assert!(message.contains("field required"));
        assert!(message.starts_with('['));
    }

    #[test]
    fn test_base_url_taken_from_config() {
        let config = ClientConfig::new("http://localhost:8000/api/v1/");
        let api = ApiClient::new(&config, Arc::new(crate::storage::MemoryStore::new())).unwrap();
        assert_eq!(api.base_url(), "http://localhost:8000/api/v1");
    }

    #[test]
    fn test_request_options() {
        let opts = RequestOptions::get().query("status", "upcoming");
        assert_eq!(opts.method(), &Method::GET);
        assert_eq!(opts.query, vec![("status", "upcoming".to_string())]);

        let body = json!({ "donor_id": "d-1" });
        let opts = RequestOptions::with_body(Method::DELETE, &body);
        assert_eq!(opts.method(), &Method::DELETE);
        assert!(opts.body.is_some());
    }
}
