//! Product and variant types decoded from the products query.
//!
//! The Admin API returns connections (`edges[].node`); these types flatten
//! them while deserializing so callers only see plain vectors in API order.

use serde::{Deserialize, Deserializer};

/// A purchasable configuration of a product.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Variant {
    /// Variant title, e.g. `"Small"`.
    pub title: String,
    /// Price exactly as the API sent it, e.g. `"19.99"`.
    #[serde(deserialize_with = "deserialize_price")]
    pub price: String,
}

impl Variant {
    /// Creates a variant from a title and a price string.
    #[must_use]
    pub fn new(title: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
        }
    }

    /// Returns the numeric value of `price`, or `None` if it is not a finite
    /// decimal number.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_variant_prices::Variant;
    ///
    /// assert_eq!(Variant::new("Small", "19.99").price_value(), Some(19.99));
    /// assert_eq!(Variant::new("Small", "free").price_value(), None);
    /// ```
    #[must_use]
    pub fn price_value(&self) -> Option<f64> {
        self.price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }
}

/// A product with its variants in the order the API returned them.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "ProductNode")]
pub struct Product {
    /// Product title, e.g. `"T-Shirt"`.
    pub title: String,
    /// Up to the first 10 variants.
    pub variants: Vec<Variant>,
}

impl Product {
    /// Creates a product from a title and its variants.
    #[must_use]
    pub fn new(title: impl Into<String>, variants: Vec<Variant>) -> Self {
        Self {
            title: title.into(),
            variants,
        }
    }
}

#[derive(Deserialize)]
struct Connection<T> {
    edges: Vec<Edge<T>>,
}

impl<T> Connection<T> {
    fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}

#[derive(Deserialize)]
struct Edge<T> {
    node: T,
}

#[derive(Deserialize)]
struct ProductNode {
    title: String,
    variants: Connection<Variant>,
}

impl From<ProductNode> for Product {
    fn from(node: ProductNode) -> Self {
        Self {
            title: node.title,
            variants: node.variants.into_nodes(),
        }
    }
}

/// The `data` object of a products query response.
#[derive(Deserialize)]
pub(crate) struct ProductsData {
    products: Connection<Product>,
}

impl ProductsData {
    pub(crate) fn into_products(self) -> Vec<Product> {
        self.products.into_nodes()
    }
}

/// Money scalars arrive as strings; older fixtures and proxies sometimes send
/// bare numbers. Both are kept as their textual form.
fn deserialize_price<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PriceRepr {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match PriceRepr::deserialize(deserializer)? {
        PriceRepr::Text(text) => text,
        PriceRepr::Number(number) => number.to_string(),
    })
}
