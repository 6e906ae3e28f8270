//! Login and signup against the external auth service.
//!
//! The service is reached only through [`AuthBackend`]. Form submission goes
//! through [`submit_login`] / [`submit_signup`], which validate locally first
//! and fold every result into an [`AuthOutcome`] for the views to match on.

mod form;
mod http;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

pub use form::{
    AccountRole, FormError, LoginForm, LoginRequest, MIN_PASSWORD_LEN, SignupFields, SignupForm,
};
pub use http::HttpAuthBackend;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The service answered and said no; the message is shown verbatim.
    #[error("{0}")]
    Rejected(String),

    #[error("Could not reach the authentication service: {0}")]
    Transport(String),

    #[error("Authentication service is not configured")]
    NotConfigured,
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Transport(err.to_string())
    }
}

/// Signup reply as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub requires_verification: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// What a login or signup attempt came to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated,
    /// Account created but unusable until the emailed link is followed.
    VerificationRequired { message: String },
    Failed { error: String },
}

const VERIFY_FALLBACK: &str = "Please check your email to verify your account.";
const SIGNUP_FALLBACK: &str = "Signup failed. Please try again.";

impl From<SignupResponse> for AuthOutcome {
    fn from(res: SignupResponse) -> Self {
        match res {
            SignupResponse {
                success: true,
                requires_verification: true,
                message,
                ..
            } => AuthOutcome::VerificationRequired {
                message: message.unwrap_or_else(|| VERIFY_FALLBACK.to_string()),
            },
            SignupResponse { success: true, .. } => AuthOutcome::Authenticated,
            SignupResponse { error, message, .. } => AuthOutcome::Failed {
                error: error
                    .or(message)
                    .unwrap_or_else(|| SIGNUP_FALLBACK.to_string()),
            },
        }
    }
}

impl From<AuthError> for AuthOutcome {
    fn from(err: AuthError) -> Self {
        AuthOutcome::Failed {
            error: err.to_string(),
        }
    }
}

#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<(), AuthError>;

    async fn signup(&self, fields: &SignupFields) -> Result<SignupResponse, AuthError>;
}

/// Stand-in used when no `AUTH_API_URL` is set.
pub struct UnconfiguredAuth;

#[async_trait]
impl AuthBackend for UnconfiguredAuth {
    async fn login(&self, _request: &LoginRequest) -> Result<(), AuthError> {
        Err(AuthError::NotConfigured)
    }

    async fn signup(&self, _fields: &SignupFields) -> Result<SignupResponse, AuthError> {
        Err(AuthError::NotConfigured)
    }
}

/// Pick the HTTP backend when a base URL is configured.
pub fn backend_from_config(base_url: Option<&str>) -> Box<dyn AuthBackend> {
    match base_url {
        Some(url) => Box::new(HttpAuthBackend::new(url)),
        None => Box::new(UnconfiguredAuth),
    }
}

pub async fn submit_login<B>(backend: &B, form: &LoginForm) -> AuthOutcome
where
    B: AuthBackend + ?Sized,
{
    let request = match form.validate() {
        Ok(request) => request,
        Err(err) => return AuthOutcome::Failed { error: err.to_string() },
    };
    match backend.login(&request).await {
        Ok(()) => {
            info!("login succeeded");
            AuthOutcome::Authenticated
        }
        Err(err) => {
            warn!(error = %err, "login failed");
            err.into()
        }
    }
}

pub async fn submit_signup<B>(backend: &B, form: &SignupForm) -> AuthOutcome
where
    B: AuthBackend + ?Sized,
{
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(err) => return AuthOutcome::Failed { error: err.to_string() },
    };
    let outcome = match backend.signup(&fields).await {
        Ok(response) => AuthOutcome::from(response),
        Err(err) => err.into(),
    };
    if let AuthOutcome::Failed { error } = &outcome {
        warn!(%error, "signup failed");
    }
    outcome
}
