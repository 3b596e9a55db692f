//! # Shopify Variant Prices
//!
//! Looks up products in a Shopify store by name through the Admin GraphQL
//! API and lists every variant of every match, cheapest first.
//!
//! ## Overview
//!
//! - Type-safe connection settings via [`CatalogConfig`] and [`CatalogConfigBuilder`]
//! - Validated newtypes for the shop domain, access token and origin override
//! - An async HTTP/GraphQL client layer in [`clients`]
//! - Product search and response flattening in [`catalog`]
//! - Price ordering and line formatting in [`presenter`]
//! - The command-line surface in [`cli`] and its driver in [`app`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shopify_variant_prices::{AccessToken, CatalogClient, CatalogConfig, Lookup, ShopDomain};
//! use shopify_variant_prices::presenter;
//!
//! let config = CatalogConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_...").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = CatalogClient::new(&config)?;
//! let lookup = Lookup::from(client.search_products("T-Shirt").await);
//! presenter::render("T-Shirt", lookup, &mut std::io::stdout())?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the endpoint and token are passed in through configuration
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **One request per lookup**: no retries, no pagination beyond the first page
//! - **Explicit outcomes**: an empty result and a failed request are distinct [`Lookup`] values

pub mod app;
pub mod catalog;
pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod presenter;

pub use catalog::{CatalogClient, CatalogError, Lookup, Product, Variant};
pub use config::{
    AccessToken, ApiVersion, CatalogConfig, CatalogConfigBuilder, HostUrl, ShopDomain,
};
pub use error::ConfigError;

pub use clients::{
    GraphqlClient, GraphqlError, HttpClient, HttpError, HttpResponse, HttpResponseError,
};
