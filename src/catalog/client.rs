//! Product search against the Admin GraphQL API.

use serde::Deserialize;

use crate::catalog::models::ProductsData;
use crate::catalog::query::{products_variables, PRODUCTS_QUERY};
use crate::catalog::{CatalogError, Product};
use crate::clients::GraphqlClient;
use crate::config::CatalogConfig;

/// Searches a store's catalog for products by name.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_variant_prices::{CatalogClient, CatalogConfig};
///
/// let client = CatalogClient::new(&config)?;
/// for product in client.search_products("T-Shirt").await? {
///     println!("{} ({} variants)", product.title, product.variants.len());
/// }
/// ```
#[derive(Debug)]
pub struct CatalogClient {
    graphql: GraphqlClient,
}

// Verify CatalogClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CatalogClient>();
};

impl CatalogClient {
    /// Creates a client for the store described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Graphql`] if the HTTP client cannot be created.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Ok(Self {
            graphql: GraphqlClient::new(config)?,
        })
    }

    /// Returns up to 10 products matching `name`, each with up to 10
    /// variants, exactly in the order the API returned them.
    ///
    /// Sends exactly one request.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Graphql`] on network failure or a non-2xx response
    /// - [`CatalogError::QueryErrors`] when the API returns errors and no data
    /// - [`CatalogError::MissingData`] when the body has no `data`
    /// - [`CatalogError::MalformedResponse`] when `data` does not have the
    ///   expected shape
    pub async fn search_products(&self, name: &str) -> Result<Vec<Product>, CatalogError> {
        tracing::debug!("Searching products matching {:?}", name);

        let response = self
            .graphql
            .query(PRODUCTS_QUERY, Some(products_variables(name)))
            .await?;

        let products = parse_products(response.body)?;
        tracing::debug!("Found {} products matching {:?}", products.len(), name);
        Ok(products)
    }
}

#[derive(Deserialize)]
struct ProductsResponse {
    data: Option<ProductsData>,
    #[serde(default)]
    errors: Vec<ResponseError>,
}

#[derive(Deserialize)]
struct ResponseError {
    message: String,
}

fn parse_products(body: serde_json::Value) -> Result<Vec<Product>, CatalogError> {
    let response: ProductsResponse = serde_json::from_value(body)?;
    let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();

    match response.data {
        Some(data) => {
            if !messages.is_empty() {
                tracing::warn!(
                    "Products query returned partial data with errors: {}",
                    messages.join("; ")
                );
            }
            Ok(data.into_products())
        }
        None if !messages.is_empty() => Err(CatalogError::QueryErrors { messages }),
        None => Err(CatalogError::MissingData),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Variant;
    use serde_json::json;

    #[test]
    fn test_parse_products_returns_products_in_api_order() {
        let products = parse_products(json!({
            "data": {"products": {"edges": [
                {"node": {"title": "B", "variants": {"edges": [
                    {"node": {"title": "One", "price": "2.00"}}
                ]}}},
                {"node": {"title": "A", "variants": {"edges": []}}}
            ]}}
        }))
        .unwrap();

        assert_eq!(
            products,
            vec![
                Product::new("B", vec![Variant::new("One", "2.00")]),
                Product::new("A", vec![]),
            ]
        );
    }

    #[test]
    fn test_parse_products_empty_edges() {
        let products = parse_products(json!({"data": {"products": {"edges": []}}})).unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_parse_products_errors_without_data() {
        let result = parse_products(json!({
            "data": null,
            "errors": [{"message": "Access denied for products field."}]
        }));

        assert!(matches!(
            result,
            Err(CatalogError::QueryErrors { ref messages })
                if messages == &["Access denied for products field.".to_string()]
        ));
    }

    #[test]
    fn test_parse_products_keeps_partial_data() {
        let products = parse_products(json!({
            "data": {"products": {"edges": []}},
            "errors": [{"message": "Throttled"}]
        }))
        .unwrap();

        assert!(products.is_empty());
    }

    #[test]
    fn test_parse_products_missing_data() {
        assert!(matches!(
            parse_products(json!({})),
            Err(CatalogError::MissingData)
        ));
        assert!(matches!(
            parse_products(json!({"raw_body": "<html>oops</html>"})),
            Err(CatalogError::MissingData)
        ));
    }

    #[test]
    fn test_parse_products_malformed_shape() {
        assert!(matches!(
            parse_products(json!({"data": {"products": null}})),
            Err(CatalogError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_products(json!({"data": {"products": {"edges": [{"node": {"title": 1}}]}}})),
            Err(CatalogError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_products(json!(["not", "an", "object"])),
            Err(CatalogError::MalformedResponse(_))
        ));
    }
}
