//! Command-line arguments.
//!
//! Connection settings can come from flags or from `SHOPIFY_*` environment
//! variables; values are validated while parsing.

use clap::{ArgAction, Parser};

use crate::config::{AccessToken, ApiVersion, CatalogConfig, HostUrl, ShopDomain};
use crate::error::ConfigError;

/// List a Shopify store's products matching a name, with variants sorted by price
#[derive(Parser, Debug)]
#[command(name = "variant-prices")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Product name to search for
    #[arg(short, long)]
    pub name: String,

    /// Shop domain, e.g. `my-store` or `my-store.myshopify.com`
    #[arg(long, env = "SHOPIFY_SHOP")]
    pub shop: ShopDomain,

    /// Admin API access token
    #[arg(long, env = "SHOPIFY_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: AccessToken,

    /// Admin API version (YYYY-MM or `unstable`)
    #[arg(long, env = "SHOPIFY_API_VERSION", default_value_t = ApiVersion::latest())]
    pub api_version: ApiVersion,

    /// Send requests to this origin instead of the shop domain
    #[arg(long, env = "SHOPIFY_API_HOST")]
    pub api_host: Option<HostUrl>,

    /// Prefix for the User-Agent header
    #[arg(long, env = "SHOPIFY_USER_AGENT_PREFIX")]
    pub user_agent_prefix: Option<String>,

    /// Exit with status 1 when the lookup request fails
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Builds the catalog configuration from the parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration cannot be built.
    pub fn config(&self) -> Result<CatalogConfig, ConfigError> {
        let mut builder = CatalogConfig::builder()
            .shop(self.shop.clone())
            .access_token(self.access_token.clone())
            .api_version(self.api_version.clone());

        if let Some(host) = &self.api_host {
            builder = builder.api_host(host.clone());
        }
        if let Some(prefix) = &self.user_agent_prefix {
            builder = builder.user_agent_prefix(prefix.clone());
        }

        builder.build()
    }
}
