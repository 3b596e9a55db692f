//! Product catalog lookups.
//!
//! - [`CatalogClient`]: sends the products query for a name
//! - [`Product`] and [`Variant`]: the flattened query result
//! - [`Lookup`]: success, no matches, or failure of one search
//! - [`CatalogError`]: why a search failed
//! - [`PRODUCTS_QUERY`]: the GraphQL document that is sent

mod client;
mod errors;
mod lookup;
mod models;
mod query;

pub use client::CatalogClient;
pub use errors::CatalogError;
pub use lookup::Lookup;
pub use models::{Product, Variant};
pub use query::{products_variables, PRODUCTS_QUERY};
