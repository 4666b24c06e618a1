use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ConfigError;

/// Default chart colours, assigned by position to brands without an explicit colour.
pub const BRAND_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// A tracked brand and the keyword variants that roll up into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: Uuid,
    /// Display label and aggregation key.
    pub name: String,
    pub keywords: Vec<String>,
    /// Own brand vs competitor. Only used for grouping in listings.
    pub is_own_brand: bool,
    pub color: String,
}

impl Brand {
    /// Create a brand with a fresh id.
    #[must_use]
    pub fn new(name: &str, keywords: &[&str], is_own_brand: bool, color: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            is_own_brand,
            color: color.to_string(),
        }
    }

    /// Trimmed keywords with blank entries removed, in configured order.
    #[must_use]
    pub fn active_keywords(&self) -> Vec<String> {
        self.keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// A brand takes part in a report only with a name and at least one keyword.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        !self.name.trim().is_empty() && self.keywords.iter().any(|k| !k.trim().is_empty())
    }

    /// Case-insensitive membership test against the brand's keywords.
    #[must_use]
    pub fn matches_keyword(&self, text: &str) -> bool {
        let needle = text.trim().to_lowercase();
        self.keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .any(|k| k.to_lowercase() == needle)
    }
}

/// Brand entry as written in the YAML file.
#[derive(Debug, Clone, Deserialize)]
struct BrandEntry {
    #[serde(default)]
    id: Option<Uuid>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default, alias = "is_own_brand")]
    own_brand: bool,
    #[serde(default)]
    color: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawBrandsFile {
    brands: Vec<BrandEntry>,
}

#[derive(Debug, Clone)]
pub struct BrandsFile {
    pub brands: Vec<Brand>,
}

impl BrandsFile {
    pub fn own_brands(&self) -> impl Iterator<Item = &Brand> {
        self.brands.iter().filter(|b| b.is_own_brand)
    }

    pub fn competitors(&self) -> impl Iterator<Item = &Brand> {
        self.brands.iter().filter(|b| !b.is_own_brand)
    }

    pub fn eligible(&self) -> impl Iterator<Item = &Brand> {
        self.brands.iter().filter(|b| b.is_eligible())
    }
}

/// Load and validate the brands configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_brands(path: &Path) -> Result<BrandsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BrandsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_brands(&content)
}

/// Parse and validate brands from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_brands(content: &str) -> Result<BrandsFile, ConfigError> {
    let raw: RawBrandsFile = serde_yaml::from_str(content)?;
    validate_entries(&raw.brands)?;

    let brands = raw
        .brands
        .into_iter()
        .enumerate()
        .map(|(position, entry)| Brand {
            id: entry.id.unwrap_or_else(Uuid::new_v4),
            name: entry.name.trim().to_string(),
            keywords: entry.keywords,
            is_own_brand: entry.own_brand,
            color: entry
                .color
                .unwrap_or_else(|| BRAND_PALETTE[position % BRAND_PALETTE.len()].to_string()),
        })
        .collect();

    Ok(BrandsFile { brands })
}

fn validate_entries(entries: &[BrandEntry]) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();
    let mut seen_ids = HashSet::new();

    for entry in entries {
        let name = entry.name.trim();

        if !name.is_empty() && !seen_names.insert(name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand name: '{name}'"
            )));
        }

        if let Some(id) = entry.id {
            if !seen_ids.insert(id) {
                return Err(ConfigError::Validation(format!("duplicate brand id: {id}")));
            }
        }

        if let Some(color) = &entry.color {
            if !is_hex_color(color) {
                return Err(ConfigError::Validation(format!(
                    "brand '{name}' has invalid color '{color}'; expected #rrggbb"
                )));
            }
        }
    }

    Ok(())
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s.chars().skip(1).all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
#[path = "brands_test.rs"]
mod tests;
