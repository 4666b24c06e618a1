//! OAuth refresh-token exchange.

use reqwest::{Client, Url};

use crate::error::KeywordsError;
use crate::types::TokenResponse;

pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Exchange a refresh token for a short-lived access token.
///
/// # Errors
///
/// - [`KeywordsError::Auth`] if the token endpoint rejects the request.
/// - [`KeywordsError::Http`] on network failure.
/// - [`KeywordsError::Deserialize`] if a 2xx body lacks an `access_token`.
pub async fn exchange_refresh_token(
    client: &Client,
    token_url: &Url,
    client_id: &str,
    client_secret: &str,
    refresh_token: &str,
) -> Result<String, KeywordsError> {
    let response = client
        .post(token_url.clone())
        .form(&[
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token"),
        ])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(KeywordsError::Auth(oauth_error_message(status.as_u16(), &body)));
    }

    let token: TokenResponse =
        serde_json::from_str(&body).map_err(|e| KeywordsError::Deserialize {
            context: "oauth token response".to_string(),
            source: e,
        })?;

    tracing::debug!(expires_in = ?token.expires_in, "obtained Google Ads access token");
    Ok(token.access_token)
}

/// Pull `error` / `error_description` out of an OAuth error body.
fn oauth_error_message(status: u16, body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let field = |key: &str| {
        parsed
            .as_ref()
            .and_then(|v| v.get(key))
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
    };

    match (field("error"), field("error_description")) {
        (Some(code), Some(desc)) => format!("{code}: {desc}"),
        (Some(code), None) => code,
        _ => format!("token endpoint returned HTTP {status}"),
    }
}
