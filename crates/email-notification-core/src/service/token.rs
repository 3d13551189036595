use std::io::{self, BufRead, StdinLock, Stdout, Write};

use email_notification_oauth::{AuthorizationCodeFlow, Token, TokenCache};
use tracing::{debug, info};
use url::Url;

use crate::error::{Error, Result};

/// State value sent with the authorization request.
pub const AUTH_STATE: &str = "state-token";

/// Source of authorization codes for the interactive flow.
pub trait AuthorizationPrompt {
    /// Shows `url` to the user and returns the code they enter.
    ///
    /// # Errors
    ///
    /// Returns an error if no code can be read.
    fn request_code(&mut self, url: &Url) -> io::Result<String>;
}

/// Prompt that prints the URL and reads the code from a line of input.
///
/// Reading blocks until a line arrives; there is no timeout.
#[derive(Debug)]
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    /// Creates a prompt over the given reader and writer.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl ConsolePrompt<StdinLock<'static>, Stdout> {
    /// Prompt bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> AuthorizationPrompt for ConsolePrompt<R, W> {
    fn request_code(&mut self, url: &Url) -> io::Result<String> {
        writeln!(
            self.output,
            "Go to the following link in your browser then type the authorization code: \n{url}"
        )?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        line.split_whitespace()
            .next()
            .map(ToString::to_string)
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::UnexpectedEof, "no authorization code entered")
            })
    }
}

/// Returns the cached token, or runs the interactive authorization and caches
/// its result.
///
/// A cached token is returned as-is; expiry is left to the client that uses it.
///
/// # Errors
///
/// Returns an error if the code cannot be read, the exchange fails, or the new
/// token cannot be written. Nothing is written on failure.
pub async fn obtain_token<P>(
    flow: &AuthorizationCodeFlow,
    cache: &TokenCache,
    prompt: &mut P,
) -> Result<Token>
where
    P: AuthorizationPrompt + ?Sized,
{
    match load_cached(cache) {
        Ok(token) => return Ok(token),
        Err(err) => debug!("{err}; starting interactive authorization"),
    }

    let token = authorize(flow, prompt).await?;

    info!(path = %cache.path().display(), "Saving credential file");
    cache.save(&token).map_err(|source| Error::TokenPersist {
        path: cache.path().to_path_buf(),
        source,
    })?;

    Ok(token)
}

fn load_cached(cache: &TokenCache) -> Result<Token> {
    cache.load().map_err(|source| Error::TokenUnavailable {
        path: cache.path().to_path_buf(),
        source,
    })
}

async fn authorize<P>(flow: &AuthorizationCodeFlow, prompt: &mut P) -> Result<Token>
where
    P: AuthorizationPrompt + ?Sized,
{
    let url = flow.authorization_url(AUTH_STATE);
    let code = prompt.request_code(&url).map_err(Error::AuthorizationPrompt)?;

    flow.exchange_code(&code).await.map_err(Error::AuthExchange)
}
