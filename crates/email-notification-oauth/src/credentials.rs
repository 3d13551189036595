//! Application client credentials.
//!
//! Reads the client-secret JSON downloaded from the Google Cloud console:
//!
//! ```json
//! {"installed": {"client_id": "...", "client_secret": "...",
//!   "auth_uri": "https://accounts.google.com/o/oauth2/auth",
//!   "token_uri": "https://oauth2.googleapis.com/token",
//!   "redirect_uris": ["http://localhost"]}}
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::flow::OAuthClient;
use crate::provider::Provider;

/// Client ID and secret issued for this application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppCredentials {
    /// `OAuth2` client ID.
    pub client_id: String,
    /// `OAuth2` client secret.
    #[serde(default)]
    pub client_secret: String,
    /// Authorization endpoint, if the file names one.
    #[serde(default)]
    pub auth_uri: Option<String>,
    /// Token endpoint, if the file names one.
    #[serde(default)]
    pub token_uri: Option<String>,
    /// Registered redirect URIs. The first one is used.
    #[serde(default)]
    pub redirect_uris: Vec<String>,
}

#[derive(Deserialize)]
struct ClientSecretFile {
    web: Option<AppCredentials>,
    installed: Option<AppCredentials>,
}

impl AppCredentials {
    /// Parses client-secret JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, has neither an `installed`
    /// nor a `web` section, or lacks a client ID or redirect URI.
    pub fn parse(json: &str) -> Result<Self> {
        let file: ClientSecretFile = serde_json::from_str(json)?;
        let credentials = file
            .web
            .or(file.installed)
            .ok_or_else(|| Error::InvalidConfig("no credentials found".into()))?;

        if credentials.client_id.is_empty() {
            return Err(Error::InvalidConfig("client_id is empty".into()));
        }
        if credentials.redirect_uris.is_empty() {
            return Err(Error::InvalidConfig(
                "missing redirect URL in the client credentials".into(),
            ));
        }

        Ok(credentials)
    }

    /// Reads and parses a client-secret file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Returns the redirect URI sent during authorization and code exchange.
    #[must_use]
    pub fn redirect_uri(&self) -> Option<&str> {
        self.redirect_uris.first().map(String::as_str)
    }

    /// Resolves the provider endpoints, falling back to Google's.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint is not a valid http(s) URL.
    pub fn provider(&self, scopes: &[&str]) -> Result<Provider> {
        let mut provider = Provider::google()?;
        if let Some(auth_uri) = &self.auth_uri {
            provider.auth_url = auth_uri.parse()?;
        }
        if let Some(token_uri) = &self.token_uri {
            provider.token_url = token_uri.parse()?;
        }
        provider.validate()?;

        Ok(provider.with_default_scopes(scopes.iter().map(ToString::to_string).collect()))
    }

    /// Builds an `OAuth2` client limited to `scopes`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints are invalid.
    pub fn oauth_client(&self, scopes: &[&str]) -> Result<OAuthClient> {
        let mut client = OAuthClient::new(&self.client_id, self.provider(scopes)?);
        if !self.client_secret.is_empty() {
            client = client.with_client_secret(&self.client_secret);
        }
        if let Some(uri) = self.redirect_uri() {
            client = client.with_redirect_uri(uri);
        }
        Ok(client)
    }
}
