//! GraphQL-specific error types.

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL API operations.
///
/// GraphQL-level errors (validation errors, user errors) arrive with HTTP
/// status 200 in the body's `errors` field and are not represented here.
///
/// # Example
///
/// ```rust
/// use shopify_variant_prices::clients::graphql::GraphqlError;
/// use shopify_variant_prices::clients::{HttpError, HttpResponseError};
///
/// let http_error = HttpError::Response(HttpResponseError {
///     code: 401,
///     message: r#"{"errors":"Unauthorized"}"#.to_string(),
///     error_reference: None,
/// });
/// let graphql_error: GraphqlError = http_error.into();
/// assert!(graphql_error.to_string().contains("Unauthorized"));
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// The request failed or the endpoint answered with a non-2xx status.
    #[error(transparent)]
    Http(#[from] HttpError),
}
