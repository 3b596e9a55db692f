//! Admin API version definitions.

use crate::error::ConfigError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Shopify Admin API version.
///
/// Shopify releases versions quarterly (January, April, July, October).
/// Recent versions have their own variants; any other quarterly version
/// parses into `Custom` and is ordered by its release date.
///
/// # Example
///
/// ```rust
/// use shopify_variant_prices::ApiVersion;
///
/// let version: ApiVersion = "2023-07".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2023_07);
/// assert_eq!(version.to_string(), "2023-07");
/// assert!(version.is_deprecated());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2023-07 (July 2023)
    V2023_07,
    /// API version 2023-10 (October 2023)
    V2023_10,
    /// API version 2024-01 (January 2024)
    V2024_01,
    /// API version 2024-04 (April 2024)
    V2024_04,
    /// API version 2024-07 (July 2024)
    V2024_07,
    /// API version 2024-10 (October 2024)
    V2024_10,
    /// API version 2025-01 (January 2025)
    V2025_01,
    /// API version 2025-04 (April 2025)
    V2025_04,
    /// API version 2025-07 (July 2025)
    V2025_07,
    /// API version 2025-10 (October 2025)
    V2025_10,
    /// Unstable API version.
    Unstable,
    /// Quarterly `YYYY-MM` version without a named variant.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_10
    }

    /// Returns the oldest version still inside Shopify's support window.
    #[must_use]
    pub const fn minimum_supported() -> Self {
        Self::V2025_01
    }

    /// Returns `true` if this version is older than [`Self::minimum_supported`].
    ///
    /// `Unstable` is never deprecated.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        *self < Self::minimum_supported()
    }

    /// `YYYYMM` release key; `Unstable` sorts after every dated version.
    fn release(&self) -> u32 {
        match self {
            Self::V2023_07 => dated(2023, 7),
            Self::V2023_10 => dated(2023, 10),
            Self::V2024_01 => dated(2024, 1),
            Self::V2024_04 => dated(2024, 4),
            Self::V2024_07 => dated(2024, 7),
            Self::V2024_10 => dated(2024, 10),
            Self::V2025_01 => dated(2025, 1),
            Self::V2025_04 => dated(2025, 4),
            Self::V2025_07 => dated(2025, 7),
            Self::V2025_10 => dated(2025, 10),
            Self::Unstable => u32::MAX,
            Self::Custom(s) => s
                .split_once('-')
                .and_then(|(year, month)| Some(dated(year.parse().ok()?, month.parse().ok()?)))
                .unwrap_or(0),
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };

        year.len() == 4
            && year.chars().all(|c| c.is_ascii_digit())
            && matches!(month, "01" | "04" | "07" | "10")
    }
}

const fn dated(year: u32, month: u32) -> u32 {
    year.saturating_mul(100).saturating_add(month)
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        // A hand-built `Custom` may share a release with a named variant.
        self.release()
            .cmp(&other.release())
            .then_with(|| {
                let custom = |v: &Self| matches!(v, Self::Custom(_));
                custom(self).cmp(&custom(other))
            })
            .then_with(|| self.to_string().cmp(&other.to_string()))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V2023_07 => "2023-07",
            Self::V2023_10 => "2023-10",
            Self::V2024_01 => "2024-01",
            Self::V2024_04 => "2024-04",
            Self::V2024_07 => "2024-07",
            Self::V2024_10 => "2024-10",
            Self::V2025_01 => "2025-01",
            Self::V2025_04 => "2025-04",
            Self::V2025_07 => "2025-07",
            Self::V2025_10 => "2025-10",
            Self::Unstable => "unstable",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "2023-07" => Ok(Self::V2023_07),
            "2023-10" => Ok(Self::V2023_10),
            "2024-01" => Ok(Self::V2024_01),
            "2024-04" => Ok(Self::V2024_04),
            "2024-07" => Ok(Self::V2024_07),
            "2024-10" => Ok(Self::V2024_10),
            "2025-01" => Ok(Self::V2025_01),
            "2025-04" => Ok(Self::V2025_04),
            "2025-07" => Ok(Self::V2025_07),
            "2025-10" => Ok(Self::V2025_10),
            "unstable" => Ok(Self::Unstable),
            _ => {
                if Self::is_valid_version_format(&s) {
                    Ok(Self::Custom(s))
                } else {
                    Err(ConfigError::InvalidApiVersion { version: s })
                }
            }
        }
    }
}
