//! Period generation.
//!
//! Periods are keyed by calendar position (month, quarter or year), so a
//! range is walked month by month and a new period starts whenever the key
//! changes. The first and last periods may cover months outside the range;
//! those months are filtered by the classifier, not here.

use sobs_core::{Granularity, Period, YearMonth};

use crate::error::ReportError;

/// The period of `granularity` that contains `month`.
#[must_use]
pub fn period_containing(month: YearMonth, granularity: Granularity) -> Period {
    match granularity {
        Granularity::Monthly => Period::month(month.year(), month.month()),
        Granularity::Quarterly => Period::quarter(month.year(), month.quarter()),
        Granularity::Yearly => Period::year(month.year()),
    }
}

/// Every period touching `[from, to]`, earliest first.
///
/// # Errors
///
/// Returns [`ReportError::InvalidRange`] if `from` is after `to`.
pub fn generate_periods(
    from: YearMonth,
    to: YearMonth,
    granularity: Granularity,
) -> Result<Vec<Period>, ReportError> {
    if from > to {
        return Err(ReportError::InvalidRange { from, to });
    }

    let mut periods: Vec<Period> = Vec::new();
    let mut cursor = from;
    loop {
        let period = period_containing(cursor, granularity);
        if periods.last() != Some(&period) {
            periods.push(period);
        }
        if cursor == to {
            break;
        }
        cursor = cursor.next();
    }

    Ok(periods)
}
