//! The GraphQL document used for product lookups.

/// Searches products by name and fetches the first page of variants.
///
/// At most 10 products are returned, each with at most 10 variants carrying
/// `title` and `price`. Takes a single `$name` variable, which Shopify
/// evaluates as a product search query.
pub const PRODUCTS_QUERY: &str = r"
query($name: String!) {
    products(first: 10, query: $name) {
        edges {
            node {
                title
                variants(first: 10) {
                    edges {
                        node {
                            title
                            price
                        }
                    }
                }
            }
        }
    }
}
";

/// Builds the variables object for [`PRODUCTS_QUERY`].
#[must_use]
pub fn products_variables(name: &str) -> serde_json::Value {
    serde_json::json!({ "name": name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_requests_first_ten_products_and_variants() {
        assert!(PRODUCTS_QUERY.contains("products(first: 10, query: $name)"));
        assert!(PRODUCTS_QUERY.contains("variants(first: 10)"));
        assert!(PRODUCTS_QUERY.contains("price"));
    }

    #[test]
    fn test_variables_carry_name_verbatim() {
        let variables = products_variables("T-Shirt \"XL\"");
        assert_eq!(variables, serde_json::json!({ "name": "T-Shirt \"XL\"" }));
    }
}
