//! The search-volume provider seam.

use std::future::Future;

use crate::{Location, Network, Sample, YearMonth};

/// Parameters for a single provider call on behalf of one brand.
#[derive(Debug, Clone, Copy)]
pub struct VolumeRequest<'a> {
    /// Keyword seeds, already trimmed with blanks removed.
    pub seeds: &'a [String],
    pub location: &'a Location,
    pub network: Network,
    pub date_from: YearMonth,
    pub date_to: YearMonth,
}

/// A source of monthly keyword search volumes.
///
/// Implementations may return samples for months outside the requested
/// range; the report engine filters them. Month values in returned samples
/// must already be 1-based calendar months.
pub trait KeywordVolumeProvider {
    type Error: std::error::Error + Send + Sync + 'static;

    fn fetch_keyword_volumes(
        &self,
        request: &VolumeRequest<'_>,
    ) -> impl Future<Output = Result<Vec<Sample>, Self::Error>> + Send;
}
