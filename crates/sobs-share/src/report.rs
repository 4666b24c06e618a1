//! Report assembly.

use std::collections::HashMap;

use sobs_core::{Brand, ResultRow, Sample, Settings};
use uuid::Uuid;

use crate::aggregate::{aggregate_brand, PeriodVolumes};
use crate::classify::PeriodIndex;
use crate::error::ReportError;
use crate::period::generate_periods;
use crate::share::round_share;

/// Build the share-of-search report for `brands` over `settings`.
///
/// `samples_by_brand` holds each brand's provider samples keyed by brand id.
/// Ineligible brands and brands without an entry (for example because their
/// provider call failed) contribute nothing, so shares are relative to the
/// brands that have data. Rows are ordered by period, then by the brand's
/// position in `brands`. Periods whose total volume is zero produce no rows.
///
/// A keyword listed by several brands counts toward each of them.
///
/// # Errors
///
/// - [`ReportError::InvalidRange`] if `settings.date_from` is after `settings.date_to`.
/// - [`ReportError::EmptyResult`] if no brand has volume in any period.
pub fn generate_report(
    brands: &[Brand],
    settings: &Settings,
    samples_by_brand: &HashMap<Uuid, Vec<Sample>>,
) -> Result<Vec<ResultRow>, ReportError> {
    let periods = generate_periods(settings.date_from, settings.date_to, settings.granularity)?;
    let index = PeriodIndex::new(
        &periods,
        settings.date_from,
        settings.date_to,
        settings.granularity,
    );

    let brand_volumes: Vec<(&Brand, PeriodVolumes)> = brands
        .iter()
        .filter(|brand| brand.is_eligible())
        .filter_map(|brand| {
            let samples = samples_by_brand.get(&brand.id)?;
            Some((brand, aggregate_brand(brand, samples, &index)))
        })
        .collect();

    let mut rows = Vec::new();
    for (pos, period) in periods.iter().enumerate() {
        let total = brand_volumes
            .iter()
            .filter_map(|(_, volumes)| volumes.get(&pos))
            .fold(0u64, |acc, v| acc.saturating_add(*v));
        if total == 0 {
            tracing::debug!(period = %period.label, "no volume in period");
            continue;
        }

        for (brand, volumes) in &brand_volumes {
            let Some(&volume) = volumes.get(&pos) else {
                continue;
            };
            rows.push(ResultRow {
                brand: brand.name.clone(),
                period: period.label.clone(),
                volume,
                share: round_share(volume, total),
                color: brand.color.clone(),
            });
        }
    }

    if rows.is_empty() {
        return Err(ReportError::EmptyResult);
    }

    tracing::debug!(
        periods = periods.len(),
        brands = brand_volumes.len(),
        rows = rows.len(),
        "report generated"
    );
    Ok(rows)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
