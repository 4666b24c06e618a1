//! Read-only listing commands: `brands` and `locations`.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use sobs_core::{load_brands, Brand, BrandsFile};
use sobs_keywords::search_countries;

/// Print configured brands grouped as own brands and competitors.
///
/// # Errors
///
/// Returns an error if the brands file cannot be loaded.
pub(crate) fn run_brands(path: &Path) -> anyhow::Result<()> {
    let file = load_brands(path)
        .with_context(|| format!("failed to load brands from {}", path.display()))?;
    print!("{}", render_brands(&file));
    Ok(())
}

/// Print built-in locations, optionally filtered by name.
pub(crate) fn run_locations(search: Option<&str>) {
    print!("{}", render_locations(search));
}

fn brand_line(out: &mut String, brand: &Brand) {
    let keywords = brand.active_keywords().join(", ");
    let name = if brand.name.trim().is_empty() {
        "(unnamed)"
    } else {
        brand.name.as_str()
    };
    let note = if brand.is_eligible() {
        ""
    } else {
        "  [skipped: needs a name and a keyword]"
    };
    let _ = writeln!(out, "  {:<25}{:<10}{keywords}{note}", name, brand.color);
}

pub(crate) fn render_brands(file: &BrandsFile) -> String {
    let mut out = String::new();
    for (title, brands) in [
        ("OWN BRANDS", file.own_brands().collect::<Vec<_>>()),
        ("COMPETITORS", file.competitors().collect::<Vec<_>>()),
    ] {
        let _ = writeln!(out, "{title}");
        if brands.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for brand in brands {
            brand_line(&mut out, brand);
        }
    }
    out
}

pub(crate) fn render_locations(search: Option<&str>) -> String {
    let query = search.unwrap_or("");
    let matches = search_countries(query);

    let mut out = String::new();
    if matches.is_empty() {
        let _ = writeln!(out, "no locations match '{query}'");
        return out;
    }

    let _ = writeln!(out, "{:<40}GEO TARGET", "LOCATION");
    if query.trim().is_empty() {
        let _ = writeln!(out, "{:<40}all", "All Countries");
    }
    for (name, id) in matches {
        let _ = writeln!(out, "{name:<40}{id}");
    }
    out
}
