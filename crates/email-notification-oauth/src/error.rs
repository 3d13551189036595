//! Errors raised while loading client credentials, talking to the token
//! endpoint, or reading and writing the token file.

use std::io;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a credential, token endpoint or token file operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing the credentials or token file failed.
    #[error("file access failed: {0}")]
    Io(#[from] io::Error),

    /// The token endpoint could not be reached.
    #[error("token endpoint request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A credentials file, token file or token response is not valid JSON.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The token endpoint refused the grant.
    #[error("token endpoint rejected the request: {error} ({description})")]
    Rejected {
        /// `OAuth2` error code such as `invalid_grant`.
        error: String,
        /// `error_description` sent along with the code, possibly empty.
        description: String,
    },

    /// The stored token cannot be refreshed.
    #[error("token has no refresh token")]
    NoRefreshToken,

    /// The token endpoint answered with something other than a usable token.
    #[error("unexpected token endpoint response: {0}")]
    InvalidResponse(String),

    /// The client-secret file or an endpoint is unusable.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),

    /// An endpoint URL does not parse.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_names_the_error_code() {
        let err = Error::Rejected {
            error: "invalid_grant".into(),
            description: "Bad Request".into(),
        };
        assert_eq!(
            err.to_string(),
            "token endpoint rejected the request: invalid_grant (Bad Request)"
        );
    }
}
