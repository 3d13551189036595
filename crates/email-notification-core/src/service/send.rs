use email_notification_oauth::provider::GMAIL_SEND_SCOPE;
use email_notification_oauth::{AppCredentials, AuthorizationCodeFlow, TokenCache};
use tracing::{error, info};

use super::token::{AuthorizationPrompt, obtain_token};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::gmail::{GmailClient, SentMessage, USER_ME};
use crate::message::OutgoingMessage;

/// Sends `message` as the authenticated user.
///
/// Steps: load the app credentials, obtain a token limited to the send scope
/// (prompting through `prompt` only when no token is cached), then submit the
/// encoded message once.
///
/// # Errors
///
/// Setup failures (credentials, authorization, token cache, invalid message)
/// are returned before any message is submitted. A failed submission is logged
/// and returned as [`Error::Send`]. Nothing is retried.
pub async fn send_email<P>(
    config: &Config,
    message: &OutgoingMessage,
    prompt: &mut P,
) -> Result<SentMessage>
where
    P: AuthorizationPrompt + ?Sized,
{
    let credentials_error = |source| Error::Credentials {
        path: config.credentials_path.clone(),
        source,
    };
    let credentials =
        AppCredentials::from_file(&config.credentials_path).map_err(credentials_error)?;
    let client = credentials
        .oauth_client(&[GMAIL_SEND_SCOPE])
        .map_err(credentials_error)?;

    message.validate()?;

    let flow = AuthorizationCodeFlow::new(client).with_offline_access();
    let cache = TokenCache::new(&config.token_path);
    let token = obtain_token(&flow, &cache, prompt).await?;

    let mut gmail = GmailClient::new(flow.client().clone(), token)
        .with_api_base(&config.api_base)
        .with_token_cache(cache);

    match gmail.send_raw(USER_ME, &message.encode_raw()).await {
        Ok(sent) => {
            info!(id = %sent.id, to = %message.to, "Message sent");
            Ok(sent)
        }
        Err(e) => {
            error!("Error: {e}");
            Err(e.into())
        }
    }
}
