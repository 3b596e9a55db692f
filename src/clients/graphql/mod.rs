//! GraphQL client for the Shopify Admin API.
//!
//! [`GraphqlClient`] is a thin layer over [`HttpClient`](crate::clients::HttpClient)
//! that posts a query document and its variables to `graphql.json`.
//!
//! # Response Structure
//!
//! GraphQL responses carry these fields in the body:
//!
//! - `data`: the query result
//! - `errors`: GraphQL errors (still HTTP 200)
//! - `extensions`: query cost information
//!
//! Only HTTP-level failures surface as [`GraphqlError`]. Interpreting
//! `errors` in a 200 response is left to the caller.

mod client;
mod errors;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
