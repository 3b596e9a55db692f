//! GraphQL client implementation for the Admin API.

use crate::clients::graphql::GraphqlError;
use crate::clients::{HttpClient, HttpResponse};
use crate::config::{ApiVersion, CatalogConfig};

/// GraphQL API client for the Shopify Admin API.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_variant_prices::clients::GraphqlClient;
/// use serde_json::json;
///
/// let client = GraphqlClient::new(&config)?;
///
/// let response = client
///     .query(
///         "query GetProduct($id: ID!) { product(id: $id) { title } }",
///         Some(json!({ "id": "gid://shopify/Product/123" })),
///     )
///     .await?;
///
/// println!("{}", response.body["data"]["product"]["title"]);
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the given configuration.
    ///
    /// Logs a warning when the configured API version is outside Shopify's
    /// support window.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] if the HTTP client cannot be created.
    pub fn new(config: &CatalogConfig) -> Result<Self, GraphqlError> {
        let api_version = config.api_version();

        if api_version.is_deprecated() {
            tracing::warn!(
                "API version {} is older than the oldest supported version {}",
                api_version,
                ApiVersion::minimum_supported()
            );
        }

        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Executes a GraphQL query against the Admin API.
    ///
    /// Sends one POST to `graphql.json` with body
    /// `{"query": <query>, "variables": <variables>}`; `variables` is left
    /// out when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for HTTP-level errors. GraphQL-level
    /// errors come back in `response.body["errors"]`.
    pub async fn query(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<HttpResponse, GraphqlError> {
        let mut body = serde_json::json!({ "query": query });
        if let Some(variables) = variables {
            body["variables"] = variables;
        }

        Ok(self.http_client.post_json(&body).await?)
    }
}
