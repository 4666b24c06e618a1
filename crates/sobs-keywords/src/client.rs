//! HTTP client for the Google Ads `generateKeywordIdeas` REST endpoint.
//!
//! Wraps `reqwest` with OAuth token handling, typed request/response bodies,
//! pagination, and retry on transient failures. Returned samples carry
//! canonical 1-based months (see [`crate::months`]).

use std::time::Duration;

use reqwest::{Client, Url};
use sobs_core::{AppConfig, GoogleAdsCredentials, KeywordVolumeProvider, Sample, VolumeRequest};
use tokio::sync::OnceCell;

use crate::auth::{exchange_refresh_token, DEFAULT_TOKEN_URL};
use crate::error::KeywordsError;
use crate::geo::resolve_geo_target;
use crate::months::{api_month_name, normalize_month};
use crate::retry::retry_with_backoff;
use crate::types::{
    ApiYearMonth, GenerateKeywordIdeasRequest, GenerateKeywordIdeasResponse,
    HistoricalMetricsOptions, KeywordIdea, KeywordSeed, YearMonthRange,
};

const DEFAULT_API_BASE_URL: &str = "https://googleads.googleapis.com/";
const DEFAULT_API_VERSION: &str = "v19";

/// The API accepts at most this many keywords in one seed.
pub const MAX_SEEDS_PER_REQUEST: usize = 20;

const PAGE_SIZE: u32 = 1000;

/// Maximum number of result pages followed per request before giving up.
pub const MAX_PAGES: usize = 20;

/// Transport and endpoint settings for [`KeywordPlannerClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub backoff_base_ms: u64,
    pub api_base_url: String,
    pub api_version: String,
    pub token_url: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_retries: 3,
            backoff_base_ms: 1_000,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        }
    }
}

impl ClientOptions {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            timeout_secs: config.request_timeout_secs,
            max_retries: config.max_retries,
            backoff_base_ms: config.retry_backoff_base_ms,
            api_base_url: config.google_ads_api_base_url.clone(),
            api_version: config.google_ads_api_version.clone(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        }
    }
}

/// Client for the keyword planner's historical metrics.
///
/// One instance serves one report run: the OAuth access token is fetched on
/// first use and reused for every later call made through the same client.
pub struct KeywordPlannerClient {
    client: Client,
    credentials: GoogleAdsCredentials,
    login_customer_id: Option<String>,
    ideas_url: Url,
    token_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
    access_token: OnceCell<String>,
}

impl KeywordPlannerClient {
    /// Creates a client from credentials and transport options.
    ///
    /// # Errors
    ///
    /// - [`KeywordsError::InvalidCustomerId`] if either customer ID is malformed.
    /// - [`KeywordsError::InvalidBaseUrl`] if an endpoint URL does not parse.
    /// - [`KeywordsError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(
        credentials: &GoogleAdsCredentials,
        options: &ClientOptions,
    ) -> Result<Self, KeywordsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("sobs/0.1 (share-of-search)")
            .build()?;

        let customer_id = normalize_customer_id(&credentials.customer_id)?;
        let login_customer_id = credentials
            .login_customer_id
            .as_deref()
            .map(normalize_customer_id)
            .transpose()?;

        let ideas_url = ideas_url(&options.api_base_url, &options.api_version, &customer_id)?;
        let token_url = Url::parse(&options.token_url).map_err(|e| KeywordsError::InvalidBaseUrl {
            url: options.token_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            credentials: credentials.clone(),
            login_customer_id,
            ideas_url,
            token_url,
            max_retries: options.max_retries,
            backoff_base_ms: options.backoff_base_ms,
            access_token: OnceCell::new(),
        })
    }

    /// Fetches every keyword idea for the request's seeds, following pagination.
    ///
    /// Seeds beyond [`MAX_SEEDS_PER_REQUEST`] are split across several calls.
    ///
    /// # Errors
    ///
    /// - [`KeywordsError::UnknownLocation`] before any network call if the
    ///   location cannot be resolved.
    /// - [`KeywordsError::Auth`] if the token exchange fails.
    /// - [`KeywordsError::Api`] on non-2xx responses after retries.
    /// - [`KeywordsError::PaginationLimit`] past [`MAX_PAGES`] pages.
    pub async fn generate_keyword_ideas(
        &self,
        request: &VolumeRequest<'_>,
    ) -> Result<Vec<KeywordIdea>, KeywordsError> {
        let geo_target = resolve_geo_target(request.location)?;
        let token = self.access_token().await?;

        let mut ideas = Vec::new();
        for chunk in request.seeds.chunks(MAX_SEEDS_PER_REQUEST) {
            let mut page_token: Option<String> = None;
            let mut pages = 0usize;
            loop {
                if pages >= MAX_PAGES {
                    return Err(KeywordsError::PaginationLimit {
                        max_pages: MAX_PAGES,
                    });
                }
                pages += 1;

                let body = build_request_body(request, chunk, geo_target.as_deref(), page_token);
                let page = self.post_ideas(token, &body).await?;
                tracing::debug!(
                    seeds = chunk.len(),
                    page = pages,
                    results = page.results.len(),
                    "received keyword ideas page"
                );
                ideas.extend(page.results);

                match page.next_page_token.filter(|t| !t.is_empty()) {
                    Some(next) => page_token = Some(next),
                    None => break,
                }
            }
        }

        Ok(ideas)
    }

    /// Fetches monthly search volumes for the request's seed keywords.
    ///
    /// Only ideas whose text equals one of the seeds (case-insensitively) are
    /// kept; related-keyword suggestions are discarded. Months are normalized
    /// to 1-based calendar months and entries without a usable month or
    /// volume are dropped.
    ///
    /// # Errors
    ///
    /// See [`KeywordPlannerClient::generate_keyword_ideas`].
    pub async fn fetch_samples(
        &self,
        request: &VolumeRequest<'_>,
    ) -> Result<Vec<Sample>, KeywordsError> {
        let ideas = self.generate_keyword_ideas(request).await?;
        Ok(ideas_to_samples(&ideas, request.seeds))
    }

    async fn access_token(&self) -> Result<&str, KeywordsError> {
        let token = self
            .access_token
            .get_or_try_init(|| {
                exchange_refresh_token(
                    &self.client,
                    &self.token_url,
                    &self.credentials.client_id,
                    &self.credentials.client_secret,
                    &self.credentials.refresh_token,
                )
            })
            .await?;
        Ok(token.as_str())
    }

    async fn post_ideas(
        &self,
        token: &str,
        body: &GenerateKeywordIdeasRequest,
    ) -> Result<GenerateKeywordIdeasResponse, KeywordsError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || async move {
            let mut builder = self
                .client
                .post(self.ideas_url.clone())
                .bearer_auth(token)
                .header("developer-token", &self.credentials.developer_token)
                .json(body);
            if let Some(login) = &self.login_customer_id {
                builder = builder.header("login-customer-id", login);
            }

            let response = builder.send().await?;
            let status = response.status();
            let text = response.text().await?;

            if !status.is_success() {
                return Err(KeywordsError::Api {
                    status: status.as_u16(),
                    message: api_error_message(&text),
                });
            }

            serde_json::from_str(&text).map_err(|e| KeywordsError::Deserialize {
                context: "generateKeywordIdeas".to_string(),
                source: e,
            })
        })
        .await
    }
}

impl KeywordVolumeProvider for KeywordPlannerClient {
    type Error = KeywordsError;

    async fn fetch_keyword_volumes(
        &self,
        request: &VolumeRequest<'_>,
    ) -> Result<Vec<Sample>, Self::Error> {
        self.fetch_samples(request).await
    }
}

/// Strips dashes and whitespace from a customer ID and checks it is all digits.
///
/// # Errors
///
/// Returns [`KeywordsError::InvalidCustomerId`] if anything but digits remains
/// or the result is empty.
pub fn normalize_customer_id(raw: &str) -> Result<String, KeywordsError> {
    let digits: String = raw
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(KeywordsError::InvalidCustomerId(raw.to_string()));
    }
    Ok(digits)
}

fn ideas_url(base_url: &str, version: &str, customer_id: &str) -> Result<Url, KeywordsError> {
    let invalid = |reason: String| KeywordsError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };
    // Exactly one trailing slash, so `join` appends instead of replacing the last segment.
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
    base.join(&format!(
        "{}/customers/{customer_id}:generateKeywordIdeas",
        version.trim_matches('/')
    ))
    .map_err(|e| invalid(e.to_string()))
}

fn build_request_body(
    request: &VolumeRequest<'_>,
    seeds: &[String],
    geo_target: Option<&str>,
    page_token: Option<String>,
) -> GenerateKeywordIdeasRequest {
    // The end bound is sent one month past the selection; the report engine
    // discards anything outside the selected range.
    let end = request.date_to.next();

    GenerateKeywordIdeasRequest {
        keyword_seed: KeywordSeed {
            keywords: seeds.to_vec(),
        },
        geo_target_constants: geo_target
            .map(|id| vec![format!("geoTargetConstants/{id}")])
            .unwrap_or_default(),
        keyword_plan_network: request.network.as_api_str(),
        historical_metrics_options: HistoricalMetricsOptions {
            year_month_range: YearMonthRange {
                start: ApiYearMonth {
                    year: request.date_from.year(),
                    month: api_month_name(request.date_from.month()).unwrap_or("JANUARY"),
                },
                end: ApiYearMonth {
                    year: end.year(),
                    month: api_month_name(end.month()).unwrap_or("DECEMBER"),
                },
            },
        },
        include_adult_keywords: false,
        page_size: PAGE_SIZE,
        page_token,
    }
}

/// Converts keyword ideas into samples, keeping only ideas that match a seed.
pub(crate) fn ideas_to_samples(ideas: &[KeywordIdea], seeds: &[String]) -> Vec<Sample> {
    let wanted: Vec<String> = seeds.iter().map(|s| s.trim().to_lowercase()).collect();
    let mut samples = Vec::new();

    for idea in ideas {
        if !wanted.contains(&idea.text.trim().to_lowercase()) {
            continue;
        }
        let Some(metrics) = &idea.keyword_idea_metrics else {
            continue;
        };

        for volume in &metrics.monthly_search_volumes {
            let month = volume.month.as_ref().and_then(normalize_month);
            let year = volume.year.and_then(|y| i32::try_from(y).ok());
            let searches = volume.monthly_searches.and_then(|v| u64::try_from(v).ok());

            match (year, month, searches) {
                (Some(year), Some(month), Some(searches)) => {
                    samples.push(Sample::new(idea.text.clone(), year, month, searches));
                }
                _ => {
                    tracing::debug!(
                        keyword = %idea.text,
                        ?volume,
                        "dropping monthly volume without usable year/month/searches"
                    );
                }
            }
        }
    }

    samples
}

/// Extracts a readable message from a Google API error envelope.
///
/// Uses `error.message`, appending the first `details[].errors[].message`
/// when present; falls back to the raw body.
fn api_error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.trim().to_string();
    };
    let error = value.get("error");
    let message = error
        .and_then(|e| e.get("message"))
        .and_then(serde_json::Value::as_str);
    let detail = error
        .and_then(|e| e.get("details"))
        .and_then(serde_json::Value::as_array)
        .and_then(|details| {
            details.iter().find_map(|d| {
                d.get("errors")
                    .and_then(serde_json::Value::as_array)
                    .and_then(|errs| errs.first())
                    .and_then(|e| e.get("message"))
                    .and_then(serde_json::Value::as_str)
            })
        });

    match (message, detail) {
        (Some(m), Some(d)) if m != d => format!("{m} ({d})"),
        (Some(m), _) => m.to_string(),
        (None, Some(d)) => d.to_string(),
        (None, None) => body.trim().to_string(),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
