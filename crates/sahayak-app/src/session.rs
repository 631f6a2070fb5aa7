//! Sign-in and the signed-in user.
//!
//! There is no account backend: any non-blank email and password are
//! accepted, for both sign-in and sign-up.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use sahayak_contracts::{
    error::{SahayakError, SahayakResult},
    locale::Locale,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Locale chosen on the login screen.
    pub locale: Locale,
}

/// What the login form submits.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Only filled in on sign-up.
    pub name: Option<String>,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

/// Turn submitted credentials into a `User`.
///
/// The display name is the given name, or the part of the email before `@`
/// when no name was given.
pub fn sign_in(credentials: &Credentials, locale: Locale) -> SahayakResult<User> {
    let email = credentials.email.trim();
    if email.is_empty() || credentials.password.is_empty() {
        return Err(SahayakError::InvalidInput {
            reason: "email and password are required".to_string(),
        });
    }

    let name = credentials
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| email.split('@').next().unwrap_or(email).to_string());

    let user = User {
        id: Uuid::new_v4(),
        name,
        email: email.to_string(),
        locale,
    };
    info!(user = %user.name, locale = %locale, "user signed in");
    Ok(user)
}
