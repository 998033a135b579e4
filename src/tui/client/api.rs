//! HTTP client for the platform API.
//!
//! One method per endpoint. Tenant and API-key headers are installed once as
//! default headers at construction; every call resolves exactly once, to a
//! decoded value or a normalized [`ApiError`]. No retries, no timeout.

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::models::{
    AskRequest, AskResponse, ClassifyRequest, ClassifyResponse, DocumentCreate, DocumentRead,
    HealthStatus, NotarySummarizeRequest, NotarySummarizeResponse, SummarizeOptions,
};

/// Tenant header name, matching the server's configuration.
pub const TENANT_HEADER: &str = "X-Tenant-ID";
/// API key header name. Omitted entirely when no key is configured.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Connection settings injected at client construction. Environment
/// resolution happens in the clap layer, never mid-call.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server origin, e.g. `http://localhost:8000`.
    pub url: String,
    /// API root path prepended to every endpoint.
    pub api_prefix: String,
    /// Default API key; absent by default.
    pub api_key: Option<String>,
    /// Default tenant; the header falls back to `"default"` when unset.
    pub tenant_id: Option<String>,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_prefix: "/api/v1".to_string(),
            api_key: None,
            tenant_id: None,
        }
    }

    /// Tenant id sent on the wire: configured value or the literal `default`.
    pub fn resolved_tenant(&self) -> &str {
        self.tenant_id
            .as_deref()
            .filter(|tenant| !tenant.is_empty())
            .unwrap_or("default")
    }

    fn base(&self) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), self.api_prefix)
    }
}

/// Normalized client error.
///
/// `Display` intentionally carries no prefix: flows show the message as-is,
/// so an HTTP failure displays the raw response body text.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{body}")]
    Http { status: StatusCode, body: String },
    /// The call never completed (connectivity, DNS, invalid config).
    #[error("{0}")]
    Transport(String),
    /// A success response carried an undecodable body.
    #[error("{0}")]
    Decode(String),
}

/// Typed client over the six platform endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            TENANT_HEADER,
            HeaderValue::from_str(config.resolved_tenant())
                .map_err(|e| ApiError::Transport(e.to_string()))?,
        );
        if let Some(key) = config.api_key.as_deref() {
            if !key.is_empty() {
                headers.insert(
                    API_KEY_HEADER,
                    HeaderValue::from_str(key).map_err(|e| ApiError::Transport(e.to_string()))?,
                );
            }
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base: config.base(),
        })
    }

    pub async fn get_health(&self) -> Result<HealthStatus, ApiError> {
        self.get("/health").await
    }

    pub async fn create_document(&self, payload: &DocumentCreate) -> Result<DocumentRead, ApiError> {
        self.post("/documents", payload).await
    }

    pub async fn get_document(&self, id: &str) -> Result<DocumentRead, ApiError> {
        self.get(&format!("/documents/{id}")).await
    }

    pub async fn classify(
        &self,
        text: &str,
        candidate_labels: &[String],
    ) -> Result<ClassifyResponse, ApiError> {
        let request = ClassifyRequest {
            text: text.to_string(),
            candidate_labels: candidate_labels.to_vec(),
        };
        self.post("/ai/classify", &request).await
    }

    pub async fn notary_summarize(
        &self,
        text: &str,
        options: SummarizeOptions,
    ) -> Result<NotarySummarizeResponse, ApiError> {
        let request = NotarySummarizeRequest::new(text, options);
        self.post("/ai/notary/summarize", &request).await
    }

    pub async fn ask(&self, question: &str, context: &str) -> Result<AskResponse, ApiError> {
        let request = AskRequest {
            question: question.to_string(),
            context: context.to_string(),
        };
        self.post("/ai/ask", &request).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(format!("{}{}", self.base, path))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::decode(path, response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .post(format!("{}{}", self.base, path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, path, "request rejected by server");
            return Err(ApiError::Http { status, body });
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
