//! End-to-end tests: parsed arguments in, printed lines and exit status out.
//!
//! Each test points the CLI at a mock Admin API through `--api-host`.

use clap::error::ErrorKind;
use clap::Parser;
use serde_json::json;
use shopify_variant_prices::app::{self, ExitStatus};
use shopify_variant_prices::cli::Cli;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GRAPHQL_PATH: &str = "/admin/api/2025-01/graphql.json";

/// Builds an argument list targeting `origin`, followed by `extra`.
fn args(origin: &str, extra: &[&str]) -> Vec<String> {
    [
        "variant-prices",
        "--shop",
        "test-shop",
        "--access-token",
        "shpat_test_token",
        "--api-version",
        "2025-01",
        "--api-host",
        origin,
    ]
    .iter()
    .chain(extra)
    .map(ToString::to_string)
    .collect()
}

/// Runs the app and returns its exit status and standard output.
async fn run(args: Vec<String>) -> (ExitStatus, String) {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    let status = app::run(&cli, &mut out).await.unwrap();
    (status, String::from_utf8(out).unwrap())
}

fn product(title: &str, variants: &[(&str, &str)]) -> serde_json::Value {
    let edges: Vec<serde_json::Value> = variants
        .iter()
        .map(|(title, price)| json!({"node": {"title": title, "price": price}}))
        .collect();
    json!({"node": {"title": title, "variants": {"edges": edges}}})
}

async fn mount_products(server: &MockServer, products: Vec<serde_json::Value>) {
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"products": {"edges": products}}})),
        )
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Argument Tests
// ============================================================================

#[tokio::test]
async fn test_missing_name_fails_without_any_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let error = Cli::try_parse_from(args(&server.uri(), &[])).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
    assert_ne!(error.exit_code(), 0);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_help_exits_zero_without_any_request() {
    let server = MockServer::start().await;

    let error = Cli::try_parse_from(args(&server.uri(), &["--help"])).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::DisplayHelp);
    assert_eq!(error.exit_code(), 0);
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Output Tests
// ============================================================================

#[tokio::test]
async fn test_single_variant_line_is_exact() {
    let server = MockServer::start().await;
    mount_products(&server, vec![product("T-Shirt", &[("Small", "19.99")])]).await;

    let (status, output) = run(args(&server.uri(), &["--name", "T-Shirt"])).await;

    assert_eq!(status, ExitStatus::Success);
    assert_eq!(output, "T-Shirt - Small - price $19.99\n");
}

#[tokio::test]
async fn test_variants_print_in_ascending_numeric_price() {
    let server = MockServer::start().await;
    mount_products(
        &server,
        vec![product(
            "T-Shirt",
            &[("Medium", "19.99"), ("Small", "5.00"), ("Large", "100")],
        )],
    )
    .await;

    let (_, output) = run(args(&server.uri(), &["-n", "T-Shirt"])).await;

    assert_eq!(
        output,
        "T-Shirt - Small - price $5.00\n\
         T-Shirt - Medium - price $19.99\n\
         T-Shirt - Large - price $100\n"
    );
}

#[tokio::test]
async fn test_equal_prices_keep_api_order() {
    let server = MockServer::start().await;
    mount_products(
        &server,
        vec![product(
            "Mug",
            &[("Blue", "12.00"), ("Mini", "3.50"), ("Red", "12.00")],
        )],
    )
    .await;

    let (_, output) = run(args(&server.uri(), &["-n", "Mug"])).await;

    assert_eq!(
        output,
        "Mug - Mini - price $3.50\n\
         Mug - Blue - price $12.00\n\
         Mug - Red - price $12.00\n"
    );
}

#[tokio::test]
async fn test_multiple_products_keep_api_order() {
    let server = MockServer::start().await;
    mount_products(
        &server,
        vec![
            product("Hoodie", &[("XL", "60"), ("S", "45.5")]),
            product("Cap", &[("Wool", "25"), ("Cotton", "15")]),
        ],
    )
    .await;

    let (status, output) = run(args(&server.uri(), &["-n", "winter"])).await;

    assert_eq!(status, ExitStatus::Success);
    assert_eq!(
        output,
        "Hoodie - S - price $45.5\n\
         Hoodie - XL - price $60\n\
         Cap - Cotton - price $15\n\
         Cap - Wool - price $25\n"
    );
}

#[tokio::test]
async fn test_no_matches_prints_single_line_and_succeeds() {
    let server = MockServer::start().await;
    mount_products(&server, vec![]).await;

    let (status, output) = run(args(&server.uri(), &["-n", "Unicorn"])).await;

    assert_eq!(status, ExitStatus::Success);
    assert_eq!(output, "No products found matching the name: Unicorn\n");
}

// ============================================================================
// Failure Tests
// ============================================================================

#[tokio::test]
async fn test_request_failure_looks_like_no_matches() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let (status, output) = run(args(&server.uri(), &["-n", "T-Shirt"])).await;

    assert_eq!(status, ExitStatus::Success);
    assert_eq!(output, "No products found matching the name: T-Shirt\n");
}

#[tokio::test]
async fn test_unreachable_endpoint_looks_like_no_matches() {
    let (status, output) = run(args("http://127.0.0.1:1", &["-n", "T-Shirt"])).await;

    assert_eq!(status, ExitStatus::Success);
    assert_eq!(output, "No products found matching the name: T-Shirt\n");
}

#[tokio::test]
async fn test_strict_mode_reports_request_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let (status, output) = run(args(&server.uri(), &["-n", "T-Shirt", "--strict"])).await;

    assert_eq!(status, ExitStatus::LookupFailed);
    assert_eq!(output, "No products found matching the name: T-Shirt\n");
}

#[tokio::test]
async fn test_strict_mode_still_succeeds_on_no_matches() {
    let server = MockServer::start().await;
    mount_products(&server, vec![]).await;

    let (status, _) = run(args(&server.uri(), &["-n", "Unicorn", "--strict"])).await;

    assert_eq!(status, ExitStatus::Success);
}
