use serde::{Deserialize, Serialize};

/// Body of `users.messages.send`.
#[derive(Debug, Serialize)]
pub(crate) struct SendRequest<'a> {
    pub raw: &'a str,
}

/// Message resource returned by `users.messages.send`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentMessage {
    /// Immutable message ID.
    pub id: String,
    /// Thread the message was placed in.
    #[serde(default)]
    pub thread_id: Option<String>,
    /// Labels applied to the message.
    #[serde(default)]
    pub label_ids: Vec<String>,
}
