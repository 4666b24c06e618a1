use sobs_core::YearMonth;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("invalid date range: start {from} is after end {to}")]
    InvalidRange { from: YearMonth, to: YearMonth },

    #[error("no data found for the selected parameters")]
    EmptyResult,
}
