//! Classification of a search result.

use crate::catalog::{CatalogError, Product};

/// The outcome of one product search.
///
/// Keeps "the store has no matching products" apart from "the request
/// failed", so output and exit status can be decided separately.
#[derive(Debug)]
pub enum Lookup {
    /// At least one product matched.
    Matches(Vec<Product>),
    /// The search succeeded and returned no products.
    NoMatches,
    /// The search could not be completed.
    Failed(CatalogError),
}

impl Lookup {
    /// Returns `true` if the search could not be completed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl From<Result<Vec<Product>, CatalogError>> for Lookup {
    fn from(result: Result<Vec<Product>, CatalogError>) -> Self {
        match result {
            Ok(products) if products.is_empty() => Self::NoMatches,
            Ok(products) => Self::Matches(products),
            Err(error) => Self::Failed(error),
        }
    }
}
