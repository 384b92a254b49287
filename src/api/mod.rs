//! REST Client
//!
//! Frontend bindings to the backend's `/api` endpoints, organized by
//! resource. Every call has the same shape: build the URL, attach the bearer
//! token, send, turn a non-2xx into [`ApiError::Status`], decode JSON.

mod applications;
mod auth;
mod cards;
mod contact;
mod dashboard;
mod donations;
mod partners;
mod renewals;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::multipart::Part;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::config;
use crate::models::Upload;
use crate::storage;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Please sign in again")]
    MissingToken,

    #[error("Invalid request: {0}")]
    InvalidPayload(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::MissingToken | ApiError::Status { status: 401, .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Characters left unescaped in query values (RFC 3986 unreserved)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Pagination and filter parameters shared by the admin listings
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub status: Option<String>,
    pub category: Option<u64>,
}

impl ListQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            search: None,
            status: None,
            category: None,
        }
    }

    pub fn search(mut self, term: &str) -> Self {
        let term = term.trim();
        self.search = (!term.is_empty()).then(|| term.to_string());
        self
    }

    pub fn status(mut self, status: Option<&str>) -> Self {
        self.status = status.filter(|s| !s.is_empty()).map(str::to_string);
        self
    }

    pub fn category(mut self, category: Option<u64>) -> Self {
        self.category = category;
        self
    }

    pub fn to_query_string(&self) -> String {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.to_string()));
        }
        let joined = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", joined)
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(1, config().page_size)
    }
}

/// Pull a human-readable message out of an error body.
///
/// The backend answers `{ "message": ... }` or `{ "error": ... }`; anything
/// else falls back to a generic message.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}

/// File part for multipart uploads. No content type is set on the request
/// itself; the boundary header comes with the form.
fn file_part(upload: Upload) -> ApiResult<Part> {
    Part::bytes(upload.bytes)
        .file_name(upload.file_name)
        .mime_str(&upload.mime)
        .map_err(|e| ApiError::InvalidPayload(format!("bad file type: {}", e)))
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    /// Client for the configured backend using the stored admin token.
    /// Falls back to the page's origin since fetch needs absolute URLs here.
    pub fn from_browser() -> Self {
        let base = match config().api_base_url.as_str() {
            "" => web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_default(),
            configured => configured.to_string(),
        };
        Self::new(base, storage::admin_token())
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request that sends the token when there is one
    fn public(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Request that requires a signed-in admin
    fn admin(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        let token = self.token.as_deref().ok_or(ApiError::MissingToken)?;
        Ok(self.http.request(method, self.url(path)).bearer_auth(token))
    }

    async fn check(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = error_message(status.as_u16(), &body);
        log::warn!("[api] {} -> {}", status, message);
        Err(ApiError::Status { status: status.as_u16(), message })
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> ApiResult<T> {
        let response = Self::check(builder.send().await?).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_empty(builder: RequestBuilder) -> ApiResult<()> {
        Self::check(builder.send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_minimal() {
        assert_eq!(ListQuery::new(2, 25).to_query_string(), "?page=2&limit=25");
    }

    #[test]
    fn test_query_string_filters_are_encoded() {
        let query = ListQuery::new(1, 10)
            .search("  o'neil & sons ")
            .status(Some("in-progress"))
            .category(Some(4));
        assert_eq!(
            query.to_query_string(),
            "?page=1&limit=10&search=o%27neil%20%26%20sons&status=in-progress&category=4"
        );
    }

    #[test]
    fn test_query_blank_filters_dropped() {
        let query = ListQuery::new(0, 0).search("   ").status(Some(""));
        assert_eq!(query.to_query_string(), "?page=1&limit=1");
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(error_message(400, r#"{"message":"Email already registered"}"#), "Email already registered");
        assert_eq!(error_message(401, r#"{"error":"Token expired"}"#), "Token expired");
        assert_eq!(error_message(500, "<html>oops</html>"), "Request failed with status 500");
        assert_eq!(error_message(404, r#"{"message":""}"#), "Request failed with status 404");
    }

    #[test]
    fn test_admin_requests_need_token() {
        let client = ApiClient::new("http://localhost:5000", None);
        assert!(matches!(client.admin(Method::GET, "/api/donations"), Err(ApiError::MissingToken)));
        assert_eq!(client.url("/api/partners"), "http://localhost:5000/api/partners");

        let signed_in = ApiClient::new("", Some("abc".into()));
        assert!(signed_in.admin(Method::GET, "/api/donations").is_ok());
    }

    #[test]
    fn test_file_part_rejects_bad_mime() {
        let upload = Upload { file_name: "logo.png".into(), mime: "not a mime".into(), bytes: vec![1, 2, 3] };
        assert!(matches!(file_part(upload), Err(ApiError::InvalidPayload(_))));

        let upload = Upload { file_name: "logo.png".into(), mime: "image/png".into(), bytes: vec![1, 2, 3] };
        assert!(file_part(upload).is_ok());
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(ApiError::MissingToken.is_unauthorized());
        assert!(ApiError::Status { status: 401, message: String::new() }.is_unauthorized());
        assert!(!ApiError::Status { status: 500, message: String::new() }.is_unauthorized());
    }
}
