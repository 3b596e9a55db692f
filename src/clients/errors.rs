//! Transport errors.

use thiserror::Error;

/// The endpoint answered with a non-2xx status.
///
/// `message` is a JSON object holding the `errors`, `error` or `raw_body`
/// fields of the response, plus an `error_reference` when the response
/// carried an `X-Request-Id`.
///
/// # Example
///
/// ```rust
/// use shopify_variant_prices::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"errors":"Invalid API key or access token"}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert_eq!(
///     error.to_string(),
///     r#"HTTP 401: {"errors":"Invalid API key or access token"}"#
/// );
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// Status code.
    pub code: u16,
    /// Error fields from the body, serialized as JSON.
    pub message: String,
    /// Value of the `X-Request-Id` response header.
    pub error_reference: Option<String>,
}

/// Why a request to the endpoint did not succeed.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The request never completed: connection, TLS or body read failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_display_shows_status_and_body_fields() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"errors":"Not Found"}"#.to_string(),
            error_reference: None,
        };
        assert_eq!(error.to_string(), r#"HTTP 404: {"errors":"Not Found"}"#);
    }

    #[test]
    fn test_http_error_displays_response_error_unchanged() {
        let error: HttpError = HttpResponseError {
            code: 503,
            message: "{}".to_string(),
            error_reference: Some("req-1".to_string()),
        }
        .into();

        assert!(matches!(error, HttpError::Response(ref e) if e.code == 503));
        assert_eq!(error.to_string(), "HTTP 503: {}");
    }
}
