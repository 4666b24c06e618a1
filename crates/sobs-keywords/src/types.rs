//! Keyword planner wire types.
//!
//! Models the JSON bodies of `customers/{id}:generateKeywordIdeas`. Proto
//! `int64` fields are emitted as JSON strings by the REST gateway, so they
//! are read through [`de_opt_int64`], which also tolerates plain numbers.

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateKeywordIdeasRequest {
    pub keyword_seed: KeywordSeed,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub geo_target_constants: Vec<String>,
    pub keyword_plan_network: &'static str,
    pub historical_metrics_options: HistoricalMetricsOptions,
    pub include_adult_keywords: bool,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct KeywordSeed {
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalMetricsOptions {
    pub year_month_range: YearMonthRange,
}

#[derive(Debug, Serialize)]
pub struct YearMonthRange {
    pub start: ApiYearMonth,
    pub end: ApiYearMonth,
}

#[derive(Debug, Serialize)]
pub struct ApiYearMonth {
    pub year: i32,
    pub month: &'static str,
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateKeywordIdeasResponse {
    #[serde(default)]
    pub results: Vec<KeywordIdea>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordIdea {
    pub text: String,
    #[serde(default)]
    pub keyword_idea_metrics: Option<KeywordIdeaMetrics>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordIdeaMetrics {
    #[serde(default)]
    pub monthly_search_volumes: Vec<MonthlySearchVolume>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySearchVolume {
    #[serde(default, deserialize_with = "de_opt_int64")]
    pub year: Option<i64>,
    #[serde(default)]
    pub month: Option<MonthOfYear>,
    #[serde(default, deserialize_with = "de_opt_int64")]
    pub monthly_searches: Option<i64>,
}

/// Month as sent by the API: enum name or raw proto enum number.
///
/// Convert with [`normalize_month`](crate::months::normalize_month); never
/// use the raw value as a calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MonthOfYear {
    Name(String),
    Value(i64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Int64Repr {
    Number(i64),
    Text(String),
}

fn de_opt_int64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Int64Repr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Int64Repr::Number(n)) => Ok(Some(n)),
        Some(Int64Repr::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

// ---------------------------------------------------------------------------
// OAuth
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}
