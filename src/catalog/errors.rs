//! Catalog lookup error types.

use crate::clients::GraphqlError;
use thiserror::Error;

/// Errors that can occur while searching the catalog.
///
/// # Example
///
/// ```rust
/// use shopify_variant_prices::CatalogError;
///
/// let error = CatalogError::QueryErrors {
///     messages: vec!["Field 'prices' doesn't exist on type 'ProductVariant'".to_string()],
/// };
/// assert!(error.to_string().contains("doesn't exist"));
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request failed at the HTTP level: network failure or non-2xx
    /// response.
    #[error(transparent)]
    Graphql(#[from] GraphqlError),

    /// The API answered with GraphQL errors and no data.
    #[error("GraphQL query failed: {}", messages.join("; "))]
    QueryErrors {
        /// The `message` of each returned error.
        messages: Vec<String>,
    },

    /// The response carried neither `data` nor `errors`.
    #[error("Response body did not contain a 'data' object")]
    MissingData,

    /// The response body did not match the products query shape.
    #[error("Malformed products response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}
