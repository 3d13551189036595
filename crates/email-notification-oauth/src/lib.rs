//! # email-notification-oauth
//!
//! `OAuth2` support for sending mail through the Gmail API.
//!
//! ## Features
//!
//! - **App credentials**: Google client-secret JSON (`installed` or `web` apps)
//! - **Authorization Code Flow**: consent URL with offline access, code exchange
//! - **Token management**: expiration checking, refresh grant
//! - **Token cache**: JSON file written atomically with owner-only permissions
//!
//! ## Quick Start
//!
//! ```ignore
//! use email_notification_oauth::{AppCredentials, AuthorizationCodeFlow, TokenCache};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = AppCredentials::from_file("credentials.json")?;
//!     let client = credentials.oauth_client(&["https://www.googleapis.com/auth/gmail.send"])?;
//!
//!     let flow = AuthorizationCodeFlow::new(client).with_offline_access();
//!     println!("Visit: {}", flow.authorization_url("state-token"));
//!
//!     let token = flow.exchange_code("code_from_consent_page").await?;
//!     TokenCache::new("token.json").save(&token)?;
//!     Ok(())
//! }
//! ```
//!
//! ### Token Refresh
//!
//! ```ignore
//! if token.is_expired() {
//!     let new_token = client.refresh_token(&token).await?;
//!     cache.save(&new_token)?;
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod credentials;
mod error;
pub mod flow;
pub mod provider;
pub mod token;

pub use credentials::AppCredentials;
pub use error::{Error, Result};
pub use flow::{AuthorizationCodeFlow, OAuthClient};
pub use provider::Provider;
pub use token::{Token, TokenCache};
