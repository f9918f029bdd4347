use std::fmt::{Debug, Formatter};

use crate::http_client::HttpRequest;
use crate::ValidationError;

pub const USERNAME_ENV: &str = "FSR_API_USERNAME";
pub const API_KEY_ENV: &str = "FSR_API_KEY";

const AUTH_EMAIL_HEADER: &str = "x-auth-email";
const AUTH_KEY_HEADER: &str = "x-auth-key";
const ACCEPT_HEADER: &str = "accept";
const ACCEPT_JSON: &str = "application/json";

/// API username and key issued by the register developer portal.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    api_key: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let username = username.into();
        let api_key = api_key.into();
        if username.trim().is_empty() {
            return Err(ValidationError::EmptyCredential { field: "username" });
        }
        if api_key.trim().is_empty() {
            return Err(ValidationError::EmptyCredential { field: "api_key" });
        }
        Ok(Self { username, api_key })
    }

    /// Reads `FSR_API_USERNAME` and `FSR_API_KEY`.
    pub fn from_env() -> Result<Self, ValidationError> {
        let username = std::env::var(USERNAME_ENV)
            .map_err(|_| ValidationError::MissingEnvVar { name: USERNAME_ENV })?;
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| ValidationError::MissingEnvVar { name: API_KEY_ENV })?;
        Self::new(username, api_key)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Attaches the auth and content negotiation headers.
    pub fn apply(&self, request: HttpRequest) -> HttpRequest {
        request
            .with_header(ACCEPT_HEADER, ACCEPT_JSON)
            .with_header(AUTH_EMAIL_HEADER, &self.username)
            .with_header(AUTH_KEY_HEADER, &self.api_key)
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
