//! Outgoing notification message.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;

use crate::error::{Error, Result};

/// A single plain-text email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutgoingMessage {
    /// Sender address.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    pub body: String,
}

impl OutgoingMessage {
    /// Creates a new outgoing message.
    #[must_use]
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Checks that no header value can break out of its header line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMessage`] if `from`, `to` or `subject` contains
    /// a CR or LF.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("From", &self.from),
            ("To", &self.to),
            ("Subject", &self.subject),
        ] {
            if value.contains(['\r', '\n']) {
                return Err(Error::InvalidMessage(format!(
                    "{name} header must not contain line breaks"
                )));
            }
        }
        Ok(())
    }

    /// Builds the RFC 2822 message: three headers, a blank line, the body.
    #[must_use]
    pub fn to_rfc2822(&self) -> String {
        format!(
            "From: {}\r\nTo: {}\r\nSubject: {}\r\n\r\n{}",
            self.from, self.to, self.subject, self.body
        )
    }

    /// Encodes the RFC 2822 message with padded URL-safe base64, the form the
    /// Gmail `raw` field expects.
    #[must_use]
    pub fn encode_raw(&self) -> String {
        URL_SAFE.encode(self.to_rfc2822())
    }
}
