//! # email-notification-core
//!
//! Sends one notification email through the Gmail API.
//!
//! This crate provides:
//! - Run configuration with `~/.email-notification` defaults
//! - The outgoing message and its base64url RFC 2822 encoding
//! - A Gmail API client that refreshes expired tokens
//! - The token store: cached token or interactive authorization
//! - The send workflow tying these together
//!
//! ```ignore
//! use email_notification_core::{Config, ConsolePrompt, OutgoingMessage, send_email};
//!
//! let message = OutgoingMessage::new("me@example.com", "ops@example.com", "Backup", "done");
//! send_email(&Config::default(), &message, &mut ConsolePrompt::stdio()).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
mod error;
pub mod gmail;
pub mod message;
pub mod service;

pub use config::Config;
pub use error::{Error, Result};
pub use gmail::{GmailClient, GmailError, SentMessage};
pub use message::OutgoingMessage;
pub use service::{AuthorizationPrompt, ConsolePrompt, obtain_token, send_email};
