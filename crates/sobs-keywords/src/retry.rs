//! Retry with exponential back-off and jitter for keyword planner calls.
//!
//! [`retry_with_backoff`] wraps any fallible async operation and retries on
//! transient errors (network failures, 429, 5xx). Everything else is returned
//! immediately; authentication and request errors will not fix themselves.

use std::future::Future;
use std::time::Duration;

use crate::error::KeywordsError;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:**
/// - Network-level failures: timeout, connection reset.
/// - HTTP 429 (quota throttling) and 5xx responses.
///
/// **Not retriable:** authentication failures, other 4xx, malformed bodies,
/// and local validation errors.
pub(crate) fn is_retriable(err: &KeywordsError) -> bool {
    match err {
        KeywordsError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        KeywordsError::Api { status, .. } => *status == 429 || (500..600).contains(status),
        KeywordsError::Auth(_)
        | KeywordsError::Deserialize { .. }
        | KeywordsError::UnknownLocation(_)
        | KeywordsError::InvalidCustomerId(_)
        | KeywordsError::PaginationLimit { .. }
        | KeywordsError::InvalidBaseUrl { .. } => false,
    }
}

/// HTTP status carried by `err`, if the failure got as far as a response.
fn status_of(err: &KeywordsError) -> Option<u16> {
    match err {
        KeywordsError::Api { status, .. } => Some(*status),
        KeywordsError::Http(e) => e.status().map(|s| s.as_u16()),
        _ => None,
    }
}

const MAX_DELAY_MS: u64 = 60_000;

/// Delay before retry number `retry` (1-based): `base_ms * 2^(retry-1)`,
/// capped at [`MAX_DELAY_MS`], then scaled by `jitter` in `[0.75, 1.25)`.
fn backoff_delay(retry: u32, base_ms: u64, jitter: f64) -> Duration {
    let exponent = retry.saturating_sub(1).min(10);
    let capped = base_ms.saturating_mul(1u64 << exponent).min(MAX_DELAY_MS);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let ms = (capped as f64 * jitter) as u64;
    Duration::from_millis(ms)
}

/// Runs `operation`, retrying transient failures up to `max_retries` times.
///
/// Each retry waits [`backoff_delay`] with ±25 % random jitter. Non-retriable
/// errors, and the last transient one, are returned as-is.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, KeywordsError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, KeywordsError>>,
{
    for retry in 1..=max_retries {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if is_retriable(&err) => err,
            Err(err) => return Err(err),
        };
        let delay = backoff_delay(retry, backoff_base_ms, rand::random::<f64>() * 0.5 + 0.75);
        tracing::warn!(
            retry,
            max_retries,
            status = status_of(&err),
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            error = %err,
            "keyword planner request failed, retrying"
        );
        tokio::time::sleep(delay).await;
    }
    operation().await
}
