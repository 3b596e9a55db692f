//! HTTP transport for the Admin GraphQL endpoint.
//!
//! [`HttpClient`] holds the reqwest client, the endpoint URL derived from a
//! [`CatalogConfig`], and the headers every request carries.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::config::CatalogConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Posts JSON documents to a store's Admin GraphQL endpoint.
///
/// Each call to [`post_json`](Self::post_json) sends exactly one request;
/// failures are returned as they happen.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_variant_prices::clients::HttpClient;
/// use serde_json::json;
///
/// let client = HttpClient::new(&config)?;
/// let response = client.post_json(&json!({"query": "{ shop { name } }"})).await?;
/// assert!(response.is_ok());
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    endpoint: String,
    headers: HashMap<&'static str, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client for the endpoint described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &CatalogConfig) -> Result<Self, HttpError> {
        let prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");

        let mut headers = HashMap::new();
        headers.insert(
            "User-Agent",
            format!("{prefix}Variant Prices v{SDK_VERSION} | Rust {rust_version}"),
        );
        headers.insert("Accept", "application/json".to_string());
        headers.insert(
            "X-Shopify-Access-Token",
            config.access_token().as_ref().to_string(),
        );

        // Proxies route on the Host header when the origin is overridden.
        if config.api_host().is_some() {
            headers.insert("Host", config.shop().to_string());
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            endpoint: config.graphql_url(),
            headers,
        })
    }

    /// Sends `body` as a JSON POST to the GraphQL endpoint.
    ///
    /// A body that is not JSON is kept as `{"raw_body": <text>}`; an empty
    /// body becomes `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request cannot be sent or the
    /// body cannot be read, and [`HttpError::Response`] for a non-2xx status.
    pub async fn post_json(&self, body: &serde_json::Value) -> Result<HttpResponse, HttpError> {
        let mut request = self.client.post(&self.endpoint).json(body);
        for (name, value) in &self.headers {
            request = request.header(*name, value);
        }

        tracing::debug!("POST {}", self.endpoint);

        let res = request.send().await?;

        let code = res.status().as_u16();
        let headers = Self::collect_headers(res.headers());
        let text = res.text().await?;

        let body = if text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&text).unwrap_or_else(|_| serde_json::json!({ "raw_body": text }))
        };

        let response = HttpResponse::new(code, headers, body);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to {}, received reason: {}",
                self.endpoint,
                reason
            );
        }

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::error_message(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    fn collect_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
        let mut collected: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            collected
                .entry(name.as_str().to_lowercase())
                .or_default()
                .push(value.to_str().unwrap_or_default().to_string());
        }
        collected
    }

    /// Keeps the parts of an error body worth reporting, as a JSON object.
    fn error_message(response: &HttpResponse) -> String {
        let mut kept = serde_json::Map::new();

        for field in ["errors", "error", "raw_body"] {
            if let Some(value) = response.body.get(field) {
                kept.insert(field.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            kept.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::Value::Object(kept).to_string()
    }
}
