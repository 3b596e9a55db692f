//! HTTP and GraphQL client layer for the Shopify Admin API.
//!
//! - [`HttpClient`]: posts JSON to the GraphQL endpoint with the access token
//! - [`HttpResponse`]: status, headers and parsed body of a response
//! - [`graphql::GraphqlClient`]: sends a query document and its variables
//!
//! Each request is attempted exactly once. Network failures and non-2xx
//! responses are returned as [`HttpError`] without retrying.

mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::HttpResponse;

pub use graphql::{GraphqlClient, GraphqlError};
