//! Gmail API access.

mod client;
mod types;

pub use client::GmailClient;
pub use types::SentMessage;

/// Gmail users API base URL.
pub const DEFAULT_API_BASE: &str = "https://gmail.googleapis.com/gmail/v1/users";

/// User ID standing for the authenticated account.
pub const USER_ME: &str = "me";

/// Errors from the Gmail API.
#[derive(Debug, thiserror::Error)]
pub enum GmailError {
    /// Transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the API.
    #[error("Gmail API error {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// The expired access token could not be refreshed.
    #[error("token refresh failed: {0}")]
    Refresh(#[from] email_notification_oauth::Error),

    /// Success response without a usable body.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
