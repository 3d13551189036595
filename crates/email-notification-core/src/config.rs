//! Run configuration.

use std::path::PathBuf;

use crate::gmail::DEFAULT_API_BASE;

/// Directory under the home directory holding credentials and token.
pub const CONFIG_DIR_NAME: &str = ".email-notification";

/// Default credentials file name.
pub const CREDENTIALS_FILE_NAME: &str = "credentials.json";

/// Default token file name.
pub const TOKEN_FILE_NAME: &str = "token.json";

/// Settings for one send invocation, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `OAuth2` client-secret JSON file.
    pub credentials_path: PathBuf,
    /// Cached token JSON file.
    pub token_path: PathBuf,
    /// Gmail users API base URL.
    pub api_base: String,
}

impl Config {
    /// Creates a configuration using the public Gmail API.
    #[must_use]
    pub fn new(credentials_path: impl Into<PathBuf>, token_path: impl Into<PathBuf>) -> Self {
        Self {
            credentials_path: credentials_path.into(),
            token_path: token_path.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Overrides the Gmail API base URL.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// `~/.email-notification`, or a relative path if there is no home directory.
    #[must_use]
    pub fn default_dir() -> PathBuf {
        dirs::home_dir().unwrap_or_default().join(CONFIG_DIR_NAME)
    }

    /// `~/.email-notification/credentials.json`
    #[must_use]
    pub fn default_credentials_path() -> PathBuf {
        Self::default_dir().join(CREDENTIALS_FILE_NAME)
    }

    /// `~/.email-notification/token.json`
    #[must_use]
    pub fn default_token_path() -> PathBuf {
        Self::default_dir().join(TOKEN_FILE_NAME)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::default_credentials_path(), Self::default_token_path())
    }
}
