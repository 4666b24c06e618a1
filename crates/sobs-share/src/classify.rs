//! Sample classification.
//!
//! Months are 1-based calendar months throughout (1 = January). A sample
//! belongs to a period only when its month lies inside the selected
//! `[from, to]` range, so the leading and trailing partial quarters/years
//! only ever see the months that were actually selected.

use std::collections::HashMap;

use sobs_core::{Granularity, Period, Sample, YearMonth};

use crate::period::period_containing;

/// Lookup from sample month to position in a period sequence.
#[derive(Debug, Clone)]
pub struct PeriodIndex {
    from: YearMonth,
    to: YearMonth,
    granularity: Granularity,
    positions: HashMap<(i32, Option<u32>), usize>,
}

impl PeriodIndex {
    #[must_use]
    pub fn new(
        periods: &[Period],
        from: YearMonth,
        to: YearMonth,
        granularity: Granularity,
    ) -> Self {
        let positions = periods
            .iter()
            .enumerate()
            .map(|(pos, p)| ((p.year, p.index), pos))
            .collect();
        Self {
            from,
            to,
            granularity,
            positions,
        }
    }

    /// Position of the period `sample` falls into, or `None` when the sample
    /// is outside the selected range or carries an invalid month.
    #[must_use]
    pub fn classify(&self, sample: &Sample) -> Option<usize> {
        let month = sample.year_month()?;
        if month < self.from || month > self.to {
            return None;
        }
        let period = period_containing(month, self.granularity);
        self.positions.get(&(period.year, period.index)).copied()
    }
}

/// Classify a single sample against `periods`.
///
/// Convenience wrapper over [`PeriodIndex`] for one-off lookups.
#[must_use]
pub fn classify_sample<'p>(
    sample: &Sample,
    periods: &'p [Period],
    granularity: Granularity,
    from: YearMonth,
    to: YearMonth,
) -> Option<&'p Period> {
    PeriodIndex::new(periods, from, to, granularity)
        .classify(sample)
        .map(|pos| &periods[pos])
}
