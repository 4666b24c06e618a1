//! Google Ads Keyword Planner client.
//!
//! Fetches historical monthly search volumes for keyword seeds and converts
//! them into engine [`Sample`](sobs_core::Sample)s with canonical 1-based
//! months.

pub mod auth;
pub mod client;
pub mod error;
pub mod geo;
pub mod months;
pub mod types;

mod retry;

pub use client::{normalize_customer_id, ClientOptions, KeywordPlannerClient};
pub use error::KeywordsError;
pub use geo::{resolve_geo_target, search_countries, COUNTRY_GEO_TARGETS};
pub use months::{api_month_name, normalize_month};
pub use types::MonthOfYear;
