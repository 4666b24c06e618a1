//! Per-brand volume aggregation.

use std::collections::{BTreeMap, HashSet};

use sobs_core::{Brand, Sample};

use crate::classify::PeriodIndex;

/// Summed monthly searches keyed by period position. Periods without matched
/// volume have no entry.
pub type PeriodVolumes = BTreeMap<usize, u64>;

/// Sum `samples` into periods for one brand.
///
/// Only samples whose keyword belongs to `brand` count. Each
/// `(keyword, year, month)` is consumed once, compared case-insensitively;
/// distinct keywords reporting the same month add up.
#[must_use]
pub fn aggregate_brand(brand: &Brand, samples: &[Sample], index: &PeriodIndex) -> PeriodVolumes {
    let mut seen: HashSet<(String, i32, u32)> = HashSet::new();
    let mut volumes = PeriodVolumes::new();

    for sample in samples {
        if !brand.matches_keyword(&sample.keyword) {
            continue;
        }
        let Some(pos) = index.classify(sample) else {
            continue;
        };
        let key = (sample.keyword.trim().to_lowercase(), sample.year, sample.month);
        if !seen.insert(key) {
            tracing::debug!(
                brand = %brand.name,
                keyword = %sample.keyword,
                year = sample.year,
                month = sample.month,
                "skipping duplicate sample"
            );
            continue;
        }
        let total = volumes.entry(pos).or_insert(0);
        *total = total.saturating_add(sample.monthly_searches);
    }

    volumes.retain(|_, v| *v > 0);
    volumes
}
