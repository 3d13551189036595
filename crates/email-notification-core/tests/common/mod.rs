//! Shared fixtures for the workflow tests.

#![allow(dead_code, clippy::unwrap_used)]

use std::io;
use std::path::{Path, PathBuf};

use email_notification_core::AuthorizationPrompt;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Prompt that answers with a fixed code and records what it was shown.
pub struct ScriptedPrompt {
    code: Option<String>,
    pub urls: Vec<Url>,
}

impl ScriptedPrompt {
    pub fn answering(code: &str) -> Self {
        Self {
            code: Some(code.to_string()),
            urls: Vec::new(),
        }
    }

    /// Prompt for runs that must not reach the interactive flow.
    pub fn unused() -> Self {
        Self {
            code: None,
            urls: Vec::new(),
        }
    }

    pub fn calls(&self) -> usize {
        self.urls.len()
    }
}

impl AuthorizationPrompt for ScriptedPrompt {
    fn request_code(&mut self, url: &Url) -> io::Result<String> {
        self.urls.push(url.clone());
        self.code
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"))
    }
}

/// Writes an `installed` client-secret file pointing at `server`.
pub fn write_credentials(dir: &Path, server: &MockServer) -> PathBuf {
    let path = dir.join("credentials.json");
    let body = json!({
        "installed": {
            "client_id": "client-id.apps.googleusercontent.com",
            "client_secret": "client-secret",
            "auth_uri": format!("{}/auth", server.uri()),
            "token_uri": format!("{}/token", server.uri()),
            "redirect_uris": ["http://localhost"],
        }
    });
    std::fs::write(&path, body.to_string()).unwrap();
    path
}

/// Token endpoint accepting `code` exactly `times` times.
pub async fn mount_code_exchange(server: &MockServer, code: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains(format!("code={code}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "granted-access",
            "token_type": "Bearer",
            "expires_in": 3599,
            "refresh_token": "granted-refresh",
            "scope": "https://www.googleapis.com/auth/gmail.send",
        })))
        .expect(times)
        .mount(server)
        .await;
}

#[cfg(unix)]
pub fn mode(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path).unwrap().permissions().mode() & 0o777
}
