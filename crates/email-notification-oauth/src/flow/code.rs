//! Authorization Code Flow implementation.

use super::OAuthClient;
use crate::error::Result;
use crate::token::Token;
use url::Url;

/// Authorization Code Flow for `OAuth2`.
///
/// The user opens the authorization URL, grants consent, and hands the
/// resulting code back to the application, which exchanges it for a token.
/// Scopes come from the provider's defaults and the redirect URI from the
/// client.
#[derive(Debug)]
pub struct AuthorizationCodeFlow {
    client: OAuthClient,
    offline_access: bool,
}

impl AuthorizationCodeFlow {
    /// Creates a new authorization code flow.
    #[must_use]
    pub const fn new(client: OAuthClient) -> Self {
        Self {
            client,
            offline_access: false,
        }
    }

    /// Requests offline access so the server issues a refresh token.
    #[must_use]
    pub const fn with_offline_access(mut self) -> Self {
        self.offline_access = true;
        self
    }

    /// Returns the underlying client.
    #[must_use]
    pub const fn client(&self) -> &OAuthClient {
        &self.client
    }

    /// Builds the consent URL, carrying `state` back to the caller.
    #[must_use]
    pub fn authorization_url(&self, state: &str) -> Url {
        let mut url = self.client.provider.auth_url.clone();

        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("client_id", &self.client.client_id)
                .append_pair("response_type", "code");

            if let Some(redirect_uri) = &self.client.redirect_uri {
                pairs.append_pair("redirect_uri", redirect_uri);
            }

            let scope = self.client.provider.default_scopes.join(" ");
            if !scope.is_empty() {
                pairs.append_pair("scope", &scope);
            }

            pairs.append_pair("state", state);

            if self.offline_access {
                pairs.append_pair("access_type", "offline");
            }
        }

        url
    }

    /// Exchanges the authorization code for an access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token exchange fails.
    pub async fn exchange_code(&self, code: &str) -> Result<Token> {
        self.client.exchange_code(code).await
    }
}
