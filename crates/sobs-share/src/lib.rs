//! Share-of-search report engine.
//!
//! Buckets monthly keyword samples into calendar periods, sums them per
//! brand and expresses each brand's volume as a share of the period total.
//! [`collect_samples`] drives a [`KeywordVolumeProvider`](sobs_core::KeywordVolumeProvider)
//! one brand at a time; [`generate_report`] is a pure function of its inputs.

pub mod aggregate;
pub mod classify;
pub mod collect;
pub mod error;
pub mod period;
pub mod report;
pub mod share;

pub use aggregate::{aggregate_brand, PeriodVolumes};
pub use classify::{classify_sample, PeriodIndex};
pub use collect::{collect_samples, BrandWarning, CollectOutcome};
pub use error::ReportError;
pub use period::{generate_periods, period_containing};
pub use report::generate_report;
pub use share::round_share;
