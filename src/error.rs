//! Configuration error types.
//!
//! Every validated connection setting is rejected here before a request can
//! be built. On the command line these surface as usage errors.
//!
//! # Example
//!
//! ```rust
//! use shopify_variant_prices::{ApiVersion, ConfigError};
//!
//! let result = "2024-02".parse::<ApiVersion>();
//! assert!(matches!(result, Err(ConfigError::InvalidApiVersion { .. })));
//! ```

use thiserror::Error;

/// A connection setting that cannot be used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The access token is empty or whitespace.
    #[error("access token is empty")]
    EmptyAccessToken,

    /// The shop is neither `name` nor `name.myshopify.com`.
    #[error("invalid shop domain '{domain}', expected 'my-store' or 'my-store.myshopify.com'")]
    InvalidShopDomain {
        /// The rejected value, lowercased.
        domain: String,
    },

    /// The version is neither quarterly `YYYY-MM` nor `unstable`.
    #[error("invalid API version '{version}', expected a quarterly YYYY-MM or 'unstable'")]
    InvalidApiVersion {
        /// The rejected value, lowercased.
        version: String,
    },

    /// The builder was finished without a required setting.
    #[error("{field} is required")]
    MissingRequiredField {
        /// Builder method that was never called.
        field: &'static str,
    },

    /// The origin override has no scheme or no host.
    #[error("invalid host URL '{url}', expected e.g. 'http://127.0.0.1:8080'")]
    InvalidHostUrl {
        /// The rejected value.
        url: String,
    },
}
