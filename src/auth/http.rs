use super::{AuthBackend, AuthError, LoginRequest, SignupFields, SignupResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// JSON-over-HTTP auth service at `{base}/auth/login` and `{base}/auth/signup`.
pub struct HttpAuthBackend {
    base_url: String,
    client: Client,
}

impl HttpAuthBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/{}", self.base_url, path)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Pull a human-readable message out of an error body: `message`, then
/// `error`, then the raw text.
pub(crate) fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body)
        && let Some(msg) = parsed.message.or(parsed.error)
    {
        return msg;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Request failed with status {status}")
    } else {
        trimmed.to_string()
    }
}

#[async_trait]
impl AuthBackend for HttpAuthBackend {
    async fn login(&self, request: &LoginRequest) -> Result<(), AuthError> {
        let response = self
            .client
            .post(self.endpoint("login"))
            .json(request)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await?;
        Err(AuthError::Rejected(error_message(status, &body)))
    }

    async fn signup(&self, fields: &SignupFields) -> Result<SignupResponse, AuthError> {
        let response = self
            .client
            .post(self.endpoint("signup"))
            .json(fields)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            match serde_json::from_str::<SignupResponse>(&body) {
                Ok(parsed) => Ok(parsed),
                Err(_) => Ok(SignupResponse {
                    success: true,
                    ..SignupResponse::default()
                }),
            }
        } else {
            // A structured failure body always goes through the outcome
            // fallbacks, even when it carries no message of its own.
            match serde_json::from_str::<SignupResponse>(&body) {
                Ok(parsed) => Ok(SignupResponse {
                    success: false,
                    ..parsed
                }),
                Err(_) => Err(AuthError::Rejected(error_message(status, &body))),
            }
        }
    }
}
