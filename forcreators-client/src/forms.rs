//! Raw form input and local validation
//!
//! Each form holds the text fields exactly as typed. Validation normalizes
//! them into the wire DTOs or short-circuits with the message for the first
//! failing rule, before any network call happens.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared::client::{ContactRequest, LoginRequest, SignupRequest};

/// Platform choices offered by the signup screen. Free-form values are
/// accepted too; the server does not treat this as a closed set.
pub const PLATFORMS: [&str; 4] = ["instagram", "tiktok", "youtube", "twitch"];

/// Signup validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignupValidationError {
    #[error("Compila tutti i campi obbligatori.")]
    MissingFields,

    #[error("Password troppo corta (minimo 6 caratteri).")]
    PasswordTooShort,

    #[error("Follower non validi.")]
    InvalidFollowers,
}

/// Login validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginValidationError {
    #[error("Inserisci email e password.")]
    MissingCredentials,
}

/// Contact validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("Compila tutti i campi.")]
    MissingFields,
}

/// Registration input fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub platform: String,
    pub username: String,
    /// Total follower count, as typed
    pub followers: String,
    /// Managed profile count, as typed
    pub profiles: String,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            platform: "instagram".to_string(),
            username: String::new(),
            followers: String::new(),
            profiles: "1".to_string(),
        }
    }
}

impl SignupForm {
    /// Validate and normalize into a signup request.
    ///
    /// Rules, in order: email/password/username non-empty and followers
    /// numeric; password at least 6 characters; followers non-negative.
    /// An empty followers field counts as zero. The profiles field is
    /// coerced to 1 when missing, unparsable, or not positive.
    pub fn validate(&self) -> Result<SignupRequest, SignupValidationError> {
        let followers = match self.followers.trim() {
            "" => Ok(0),
            text => text.parse::<i64>(),
        };

        if self.email.trim().is_empty()
            || self.password.is_empty()
            || self.username.trim().is_empty()
            || followers.is_err()
        {
            return Err(SignupValidationError::MissingFields);
        }
        if self.password.chars().count() < 6 {
            return Err(SignupValidationError::PasswordTooShort);
        }
        let followers = followers.unwrap_or(0);
        if followers < 0 {
            return Err(SignupValidationError::InvalidFollowers);
        }

        let profiles_count = self
            .profiles
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|count| *count > 0)
            .unwrap_or(1);

        Ok(SignupRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            main_platform: self.platform.clone(),
            username: self.username.trim().to_string(),
            followers: followers as u64,
            profiles_count: profiles_count.min(u32::MAX as i64) as u32,
        })
    }
}

/// Authentication input fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Validate into a login request; both fields must be non-empty.
    pub fn validate(&self) -> Result<LoginRequest, LoginValidationError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(LoginValidationError::MissingCredentials);
        }
        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Contact-page input fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Validate into a contact request; every field must be non-empty after
    /// trimming.
    pub fn validate(&self) -> Result<ContactRequest, ContactValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let subject = self.subject.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || subject.is_empty() || message.is_empty() {
            return Err(ContactValidationError::MissingFields);
        }
        Ok(ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }

    /// Reset every field, used after a successful submission.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
