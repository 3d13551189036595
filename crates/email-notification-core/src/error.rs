//! Error types for the core library.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::gmail::GmailError;

/// Errors that can occur while sending a notification.
#[derive(Debug, Error)]
pub enum Error {
    /// Client credentials file missing or malformed.
    #[error("unable to load client secret file {}: {source}", .path.display())]
    Credentials {
        /// Credentials file path.
        path: PathBuf,
        /// Underlying read or parse failure.
        source: email_notification_oauth::Error,
    },

    /// No usable cached token. Triggers interactive authorization.
    #[error("no usable token cached at {}: {source}", .path.display())]
    TokenUnavailable {
        /// Token file path.
        path: PathBuf,
        /// Underlying read or parse failure.
        source: email_notification_oauth::Error,
    },

    /// The authorization code could not be read.
    #[error("unable to read authorization code: {0}")]
    AuthorizationPrompt(#[source] io::Error),

    /// The authorization code exchange failed.
    #[error("unable to retrieve token from web: {0}")]
    AuthExchange(#[source] email_notification_oauth::Error),

    /// The token cache could not be written.
    #[error("unable to cache oauth token at {}: {source}", .path.display())]
    TokenPersist {
        /// Token file path.
        path: PathBuf,
        /// Underlying write failure.
        source: email_notification_oauth::Error,
    },

    /// Message fields cannot form a valid header block.
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    /// The Gmail send call failed.
    #[error("unable to send message: {0}")]
    Send(#[from] GmailError),
}

impl Error {
    /// Returns true for setup failures that end the run.
    ///
    /// Only [`Error::Send`] is an expected, reportable outcome.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::Send(_))
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
