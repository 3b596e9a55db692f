//! Text output for a product lookup.
//!
//! Variants are printed one per line, cheapest first within each product:
//!
//! ```text
//! T-Shirt - Large - price $5.00
//! T-Shirt - Small - price $19.99
//! ```

use std::cmp::Ordering;
use std::io::{self, Write};

use crate::catalog::{Lookup, Product, Variant};

/// Sorts variants by ascending numeric price.
///
/// The sort is stable: variants with equal prices keep their relative order.
/// Prices that are not finite numbers sort after every numeric price.
///
/// # Example
///
/// ```rust
/// use shopify_variant_prices::presenter::sort_variants_by_price;
/// use shopify_variant_prices::Variant;
///
/// let mut variants = vec![
///     Variant::new("Medium", "19.99"),
///     Variant::new("Small", "5.00"),
///     Variant::new("Large", "100"),
/// ];
/// sort_variants_by_price(&mut variants);
///
/// let prices: Vec<&str> = variants.iter().map(|v| v.price.as_str()).collect();
/// assert_eq!(prices, ["5.00", "19.99", "100"]);
/// ```
pub fn sort_variants_by_price(variants: &mut [Variant]) {
    variants.sort_by(|a, b| compare_prices(a.price_value(), b.price_value()));
}

fn compare_prices(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Formats one output line: `<product> - <variant> - price $<price>`.
///
/// The price is printed exactly as the API sent it.
#[must_use]
pub fn format_variant_line(product: &Product, variant: &Variant) -> String {
    format!(
        "{} - {} - price ${}",
        product.title, variant.title, variant.price
    )
}

/// Formats the single line printed when nothing can be listed.
#[must_use]
pub fn format_no_products(name: &str) -> String {
    format!("No products found matching the name: {name}")
}

/// Writes the result of a lookup for `name` to `out`.
///
/// Products keep the API order; each product's variants are sorted by price.
/// A lookup with no matches and a failed lookup both print the single
/// "no products found" line.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render<W: Write>(name: &str, lookup: Lookup, out: &mut W) -> io::Result<()> {
    let Lookup::Matches(products) = lookup else {
        return writeln!(out, "{}", format_no_products(name));
    };

    for mut product in products {
        let mut variants = std::mem::take(&mut product.variants);
        sort_variants_by_price(&mut variants);
        for variant in &variants {
            writeln!(out, "{}", format_variant_line(&product, variant))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;

    fn rendered(name: &str, lookup: Lookup) -> String {
        let mut out = Vec::new();
        render(name, lookup, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn prices(variants: &[Variant]) -> Vec<&str> {
        variants.iter().map(|v| v.price.as_str()).collect()
    }

    #[test]
    fn test_sort_orders_numerically_not_lexically() {
        let mut variants = vec![
            Variant::new("a", "19.99"),
            Variant::new("b", "5.00"),
            Variant::new("c", "100"),
        ];

        sort_variants_by_price(&mut variants);

        assert_eq!(prices(&variants), ["5.00", "19.99", "100"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_prices() {
        let mut variants = vec![
            Variant::new("first", "10"),
            Variant::new("cheap", "1"),
            Variant::new("second", "10.00"),
            Variant::new("third", "10.0"),
        ];

        sort_variants_by_price(&mut variants);

        let titles: Vec<&str> = variants.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, ["cheap", "first", "second", "third"]);
    }

    #[test]
    fn test_sort_puts_unparseable_prices_last_in_original_order() {
        let mut variants = vec![
            Variant::new("x", "n/a"),
            Variant::new("y", "3"),
            Variant::new("z", ""),
            Variant::new("w", "1"),
        ];

        sort_variants_by_price(&mut variants);

        let titles: Vec<&str> = variants.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, ["w", "y", "x", "z"]);
    }

    #[test]
    fn test_format_variant_line_is_exact() {
        let product = Product::new("T-Shirt", vec![]);
        let variant = Variant::new("Small", "19.99");

        assert_eq!(
            format_variant_line(&product, &variant),
            "T-Shirt - Small - price $19.99"
        );
    }

    #[test]
    fn test_format_keeps_price_text_unrounded() {
        let product = Product::new("Mug", vec![]);
        let variant = Variant::new("Default Title", "10.500");

        assert_eq!(
            format_variant_line(&product, &variant),
            "Mug - Default Title - price $10.500"
        );
    }

    #[test]
    fn test_render_no_matches_prints_single_line() {
        assert_eq!(
            rendered("Unicorn", Lookup::NoMatches),
            "No products found matching the name: Unicorn\n"
        );
    }

    #[test]
    fn test_render_failure_prints_same_line_as_no_matches() {
        assert_eq!(
            rendered("Unicorn", Lookup::Failed(CatalogError::MissingData)),
            rendered("Unicorn", Lookup::NoMatches)
        );
    }

    #[test]
    fn test_render_multiple_products_keeps_product_order() {
        let lookup = Lookup::Matches(vec![
            Product::new(
                "T-Shirt",
                vec![Variant::new("Small", "19.99"), Variant::new("Large", "5.00")],
            ),
            Product::new(
                "Hoodie",
                vec![Variant::new("Blue", "45"), Variant::new("Red", "40")],
            ),
        ]);

        assert_eq!(
            rendered("shirt", lookup),
            "T-Shirt - Large - price $5.00\n\
             T-Shirt - Small - price $19.99\n\
             Hoodie - Red - price $40\n\
             Hoodie - Blue - price $45\n"
        );
    }

    #[test]
    fn test_render_product_without_variants_prints_nothing_for_it() {
        let lookup = Lookup::Matches(vec![Product::new("Gift Card", vec![])]);
        assert_eq!(rendered("gift", lookup), "");
    }
}
