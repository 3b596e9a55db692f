//! Runs one lookup from parsed arguments to printed output.

use std::io::{self, Write};
use std::process::ExitCode;

use thiserror::Error;

use crate::catalog::{CatalogClient, Lookup};
use crate::cli::Cli;
use crate::error::ConfigError;
use crate::presenter;

/// How a completed run should exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Products were listed, or none matched, or a failure is being tolerated.
    Success,
    /// The lookup failed and `--strict` was given.
    LookupFailed,
}

impl ExitStatus {
    /// Decides the exit status for a lookup outcome.
    ///
    /// A failed request only changes the exit status in strict mode.
    #[must_use]
    pub const fn for_lookup(lookup: &Lookup, strict: bool) -> Self {
        if strict && lookup.is_failure() {
            Self::LookupFailed
        } else {
            Self::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => Self::SUCCESS,
            ExitStatus::LookupFailed => Self::FAILURE,
        }
    }
}

/// Errors that stop a run before or after the lookup itself.
#[derive(Debug, Error)]
pub enum AppError {
    /// The connection settings were unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP client could not be set up.
    #[error("Failed to initialize the catalog client: {0}")]
    Client(#[source] crate::catalog::CatalogError),

    /// Output could not be written.
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Searches the catalog for `cli.name` and writes the result to `out`.
///
/// A failed request is logged and rendered like an empty result.
///
/// # Errors
///
/// Returns [`AppError`] if the configuration or client cannot be built, or
/// writing to `out` fails.
pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<ExitStatus, AppError> {
    let config = cli.config()?;
    let client = CatalogClient::new(&config).map_err(AppError::Client)?;

    let lookup = Lookup::from(client.search_products(&cli.name).await);

    if let Lookup::Failed(error) = &lookup {
        tracing::error!("Error fetching products: {}", error);
    }

    let status = ExitStatus::for_lookup(&lookup, cli.strict);
    presenter::render(&cli.name, lookup, out)?;
    out.flush()?;

    Ok(status)
}
