use email_notification_oauth::{OAuthClient, Token, TokenCache};
use reqwest::Client;
use tracing::{debug, info, warn};

use super::types::{SendRequest, SentMessage};
use super::{DEFAULT_API_BASE, GmailError};

/// Gmail API client bound to one access token.
///
/// An expired token is refreshed before the request goes out. When a
/// [`TokenCache`] is attached, the refreshed token is written back to it.
#[derive(Debug)]
pub struct GmailClient {
    http: Client,
    api_base: String,
    oauth: OAuthClient,
    token: Token,
    cache: Option<TokenCache>,
}

impl GmailClient {
    /// Creates a client for the public Gmail API.
    #[must_use]
    pub fn new(oauth: OAuthClient, token: Token) -> Self {
        Self {
            http: Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            oauth,
            token,
            cache: None,
        }
    }

    /// Overrides the users API base URL.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Persists refreshed tokens to `cache`.
    #[must_use]
    pub fn with_token_cache(mut self, cache: TokenCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Current access token.
    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.token
    }

    /// Sends a base64url-encoded RFC 2822 message as `user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be refreshed, the request fails,
    /// or the API answers with a non-success status.
    pub async fn send_raw(&mut self, user_id: &str, raw: &str) -> Result<SentMessage, GmailError> {
        self.ensure_fresh_token().await?;

        let url = format!("{}/{}/messages/send", self.api_base, user_id);
        debug!(%url, "Sending message");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token.access_token)
            .json(&SendRequest { raw })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GmailError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    async fn ensure_fresh_token(&mut self) -> Result<(), GmailError> {
        if self.token.is_valid() {
            return Ok(());
        }

        info!("Access token expired, refreshing");
        self.token = self.oauth.refresh_token(&self.token).await?;

        if let Some(cache) = &self.cache
            && let Err(e) = cache.save(&self.token)
        {
            warn!(path = %cache.path().display(), "Failed to cache refreshed token: {e}");
        }
        Ok(())
    }
}
