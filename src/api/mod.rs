//! Synchronous HTTP client for the FemPlus backend.
//!
//! One request per user action. Every failure maps into [`ApiError`]:
//! transport errors, non-2xx responses (body mined for a
//! `detail`/`message` field, falling back to `HTTP <status>`), and
//! unexpected response shapes. A body that is not JSON is substituted
//! with a `{"detail": "No JSON response"}` sentinel rather than a parse
//! error.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

use crate::schema::{
    AnalysisResult, FeedbackEntry, FeedbackRequest, GasSnapshot, PredictRequest, Reading,
    TokenResponse, UserProfile,
};
use crate::session::Session;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("unexpected response shape: {0}")]
    Decode(String),
}

pub struct ApiClient {
    base: String,
    bearer: Option<String>,
}

impl ApiClient {
    pub fn new(session: &Session) -> Self {
        Self {
            base: session.api_base(),
            bearer: session.bearer(),
        }
    }

    pub fn signup(&self, email: &str, password: &str) -> Result<Value, ApiError> {
        self.post_json("/auth/signup", json!({ "email": email, "password": password }))
    }

    pub fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let value =
            self.post_json("/auth/login", json!({ "email": email, "password": password }))?;
        decode(value)
    }

    pub fn me(&self) -> Result<UserProfile, ApiError> {
        decode(self.get("/auth/me")?)
    }

    pub fn add_reading(&self, reading: &Reading) -> Result<Value, ApiError> {
        self.post_json("/flow/single", reading)
    }

    pub fn analysis(&self, email: &str) -> Result<AnalysisResult, ApiError> {
        let path = format!("/flow/analysis/{}", encode_path_segment(email));
        decode(self.get(&path)?)
    }

    pub fn predict(&self, request: &PredictRequest) -> Result<AnalysisResult, ApiError> {
        decode(self.post_json("/flow/predict", request)?)
    }

    pub fn send_feedback(&self, feedback: &FeedbackRequest) -> Result<Value, ApiError> {
        self.post_json("/feedback/", feedback)
    }

    pub fn public_feedback(&self, limit: usize) -> Result<Vec<FeedbackEntry>, ApiError> {
        decode(self.get(&format!("/feedback/public?limit={limit}"))?)
    }

    pub fn gas_latest(&self) -> Result<GasSnapshot, ApiError> {
        decode(self.get("/data/gas-sensor/latest")?)
    }

    pub fn gas_add_reading(&self, user_email: &str) -> Result<Value, ApiError> {
        self.post_json("/data/gas-sensor/add-reading", json!({ "user_email": user_email }))
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base, path)
        } else {
            format!("{}/{}", self.base, path)
        }
    }

    fn request(&self, method: &str, path: &str) -> ureq::Request {
        let url = self.url(path);
        debug!(method, %url, "request");
        let mut req = ureq::request(method, &url);
        if let Some(bearer) = &self.bearer {
            req = req.set("Authorization", bearer);
        }
        req
    }

    fn get(&self, path: &str) -> Result<Value, ApiError> {
        finish(self.request("GET", path).call())
    }

    fn post_json(&self, path: &str, body: impl Serialize) -> Result<Value, ApiError> {
        finish(self.request("POST", path).send_json(body))
    }
}

fn finish(result: Result<ureq::Response, ureq::Error>) -> Result<Value, ApiError> {
    match result {
        Ok(resp) => {
            let status = resp.status();
            let text = resp
                .into_string()
                .map_err(|e| ApiError::Network(e.to_string()))?;
            parse_body(status, &text)
        }
        Err(ureq::Error::Status(status, resp)) => {
            let text = resp.into_string().unwrap_or_default();
            parse_body(status, &text)
        }
        Err(err) => Err(ApiError::Network(err.to_string())),
    }
}

/// Core of the error taxonomy, factored out of the transport so it is
/// directly testable.
pub fn parse_body(status: u16, body: &str) -> Result<Value, ApiError> {
    let value: Value = serde_json::from_str(body)
        .unwrap_or_else(|_| json!({ "detail": "No JSON response" }));
    if (200..300).contains(&status) {
        return Ok(value);
    }
    let message = value
        .get("detail")
        .and_then(Value::as_str)
        .or_else(|| value.get("message").and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {status}"));
    Err(ApiError::Backend { status, message })
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Percent-encode a URL path segment (the analysis email lands in the
/// path, and `@` is not safe there).
pub fn encode_path_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
