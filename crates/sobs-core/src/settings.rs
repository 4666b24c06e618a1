use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CoreError, YearMonth};

/// Time-bucket size used to aggregate monthly samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Monthly,
    Quarterly,
    Yearly,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Monthly => write!(f, "monthly"),
            Granularity::Quarterly => write!(f, "quarterly"),
            Granularity::Yearly => write!(f, "yearly"),
        }
    }
}

impl FromStr for Granularity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" => Ok(Granularity::Monthly),
            "quarterly" | "quarter" => Ok(Granularity::Quarterly),
            "yearly" | "year" => Ok(Granularity::Yearly),
            _ => Err(CoreError::InvalidGranularity(s.to_string())),
        }
    }
}

/// Ad inventory the provider reports volumes for. Passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Network {
    GoogleSearch,
    GoogleSearchAndPartners,
}

impl Network {
    /// Enum name used on the wire by the keyword planner API.
    #[must_use]
    pub fn as_api_str(self) -> &'static str {
        match self {
            Network::GoogleSearch => "GOOGLE_SEARCH",
            Network::GoogleSearchAndPartners => "GOOGLE_SEARCH_AND_PARTNERS",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_str())
    }
}

impl FromStr for Network {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        match normalized.as_str() {
            "GOOGLE_SEARCH" | "SEARCH" => Ok(Network::GoogleSearch),
            "GOOGLE_SEARCH_AND_PARTNERS" | "SEARCH_AND_PARTNERS" => {
                Ok(Network::GoogleSearchAndPartners)
            }
            _ => Err(CoreError::InvalidNetwork(s.to_string())),
        }
    }
}

/// Geographic scope for the provider query.
///
/// `Named` holds either a numeric geo target ID or a country name; the
/// provider boundary resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    All,
    Named(String),
}

impl Location {
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Location::All)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::All => write!(f, "All Countries"),
            Location::Named(name) => f.write_str(name),
        }
    }
}

impl FromStr for Location {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("all")
            || trimmed.eq_ignore_ascii_case("all countries")
        {
            Ok(Location::All)
        } else {
            Ok(Location::Named(trimmed.to_string()))
        }
    }
}

/// Immutable parameters for one report generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub location: Location,
    pub network: Network,
    pub date_from: YearMonth,
    pub date_to: YearMonth,
    pub granularity: Granularity,
}

impl Settings {
    /// `true` when `date_from <= date_to`.
    #[must_use]
    pub fn has_valid_range(&self) -> bool {
        self.date_from <= self.date_to
    }
}
