use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("You must accept the terms of service")]
    TermsNotAccepted,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    #[default]
    Patient,
    Doctor,
    Admin,
}

impl AccountRole {
    pub const ALL: [AccountRole; 3] = [AccountRole::Patient, AccountRole::Doctor, AccountRole::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            AccountRole::Patient => "patient",
            AccountRole::Doctor => "doctor",
            AccountRole::Admin => "admin",
        }
    }

    /// Unknown keys fall back to `Patient`.
    pub fn from_key(key: &str) -> Self {
        AccountRole::ALL
            .into_iter()
            .find(|role| role.as_str() == key)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            AccountRole::Patient => "Patient",
            AccountRole::Doctor => "Doctor",
            AccountRole::Admin => "Clinic admin",
        }
    }
}

/// Credentials as sent to the auth service.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signup payload as sent to the auth service.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupFields {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: AccountRole,
}

/// Raw login form state as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, FormError> {
        let email = validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::Missing("Password"));
        }
        Ok(LoginRequest {
            email,
            password: self.password.clone(),
        })
    }
}

/// Raw signup form state as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: AccountRole,
    pub accept_terms: bool,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupFields, FormError> {
        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            return Err(FormError::Missing("Full name"));
        }
        let email = validate_email(&self.email)?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if !self.accept_terms {
            return Err(FormError::TermsNotAccepted);
        }
        Ok(SignupFields {
            full_name: full_name.to_string(),
            email,
            password: self.password.clone(),
            role: self.role,
        })
    }
}

fn validate_email(raw: &str) -> Result<String, FormError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(FormError::Missing("Email"));
    }
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && domain.contains('.')
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace) =>
        {
            Ok(email.to_ascii_lowercase())
        }
        _ => Err(FormError::InvalidEmail),
    }
}
