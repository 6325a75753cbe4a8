//! The signed-in user as far as this crate is concerned: an id plus the
//! token issued by the hosted backend. Signing in and out happen elsewhere;
//! a `Session` is built once at startup and passed by reference.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fmt;

#[derive(Clone)]
pub struct Session {
    user_id: String,
    access_token: Option<String>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, access_token: Option<String>) -> AppResult<Self> {
        let user_id = user_id.into();
        if user_id.trim().is_empty() {
            return Err(AppError::MissingSession("user id is empty".into()));
        }
        Ok(Self {
            user_id,
            access_token: access_token.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Self::new(cfg.user_id.clone(), cfg.access_token.clone())
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// The bearer token, required by the remote adapter.
    pub fn require_token(&self) -> AppResult<&str> {
        self.access_token().ok_or_else(|| {
            AppError::MissingSession(
                "no access token; set FITLOG_ACCESS_TOKEN or access_token in the config".into(),
            )
        })
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
