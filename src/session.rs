//! Persistent client state: API base plus the stored credentials.
//!
//! The session file is the only state the client keeps between runs; the
//! backend remains the system of record for readings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub api_base: String,
    pub token: Option<String>,
    pub email: Option<String>,
    #[serde(skip)]
    path: PathBuf,
}

impl Session {
    fn fresh(path: &Path) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token: None,
            email: None,
            path: path.to_path_buf(),
        }
    }

    /// Load the session file, falling back to a fresh session when the
    /// file is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Self::fresh(path),
        };
        match serde_json::from_str::<Session>(&content) {
            Ok(mut session) => {
                session.path = path.to_path_buf();
                session
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "session file unreadable, starting fresh");
                Self::fresh(path)
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("failed to write session {}", self.path.display()))
    }

    /// Override the API base; callers persist with [`Session::save`].
    pub fn set_api_base(&mut self, base: &str) {
        self.api_base = normalize_base(base);
    }

    pub fn api_base(&self) -> String {
        normalize_base(&self.api_base)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn log_in(&mut self, token: String, email: String) {
        self.token = Some(token);
        self.email = Some(email);
    }

    pub fn log_out(&mut self) {
        self.token = None;
        self.email = None;
    }

    /// `Authorization` header value, when a token is stored.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }
}

/// Trim whitespace and stray quotes, drop a trailing slash.
pub fn normalize_base(base: &str) -> String {
    let trimmed: String = base
        .trim()
        .chars()
        .filter(|c| *c != '"' && *c != '\'')
        .collect();
    trimmed.trim_end_matches('/').to_string()
}
