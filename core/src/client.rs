//! Stateless HTTP request builder and response parser for the questions API.
//!
//! # Design
//! `QuestionsClient` holds only a `base_url`. Each endpoint is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. Whoever executes the round-trip in between (a
//! `Transport`, or the host itself) is not this type's concern, and neither is
//! remembering results: that lives in `ClientState`.

use serde_json::Value;

use crate::error::{ApiError, DEFAULT_FAILURE_MESSAGE};
use crate::http::{encode_component, HttpRequest, HttpResponse};
use crate::types::{truthy, Query, QuestionsEnvelope, SubjectList, TestResult};

/// Base URL used when none is configured, relative to the serving origin.
pub const DEFAULT_BASE_URL: &str = "/api";

/// Synchronous, stateless client for the questions API.
#[derive(Debug, Clone)]
pub struct QuestionsClient {
    base_url: String,
}

impl Default for QuestionsClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl QuestionsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/questions/{subject}/{classLevel}[?year=..]`
    pub fn build_fetch_questions(&self, query: &Query) -> HttpRequest {
        let mut url = format!(
            "{}/questions/{}/{}",
            self.base_url,
            encode_component(&query.subject),
            query.class_level.as_str()
        );
        if let Some(year) = query.year.as_deref().filter(|y| !y.is_empty()) {
            url.push_str("?year=");
            url.push_str(&encode_component(year));
        }
        HttpRequest::get_json(url)
    }

    pub fn build_get_subjects(&self) -> HttpRequest {
        HttpRequest::get_json(format!("{}/subjects", self.base_url))
    }

    pub fn build_test_connection(&self) -> HttpRequest {
        HttpRequest::get_json(format!("{}/test-api", self.base_url))
    }

    /// Parse a questions envelope. The HTTP status is not consulted on its
    /// own: the backend sends `{success: false, error}` bodies with 4xx/5xx
    /// statuses, and the body's flag is what decides.
    pub fn parse_fetch_questions(&self, response: HttpResponse) -> Result<QuestionsEnvelope, ApiError> {
        let body = parse_json(&response)?;
        if !body.get("success").is_some_and(truthy) {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .unwrap_or(DEFAULT_FAILURE_MESSAGE)
                .to_string();
            return Err(ApiError::RequestFailed {
                message,
                status: response.status,
            });
        }
        serde_json::from_value(body).map_err(|e| {
            ApiError::Transport(format!("HTTP {}: unexpected envelope shape: {e}", response.status))
        })
    }

    pub fn parse_get_subjects(&self, response: HttpResponse) -> Result<SubjectList, ApiError> {
        parse_json(&response)
    }

    pub fn parse_test_connection(&self, response: HttpResponse) -> Result<TestResult, ApiError> {
        parse_json(&response)
    }
}

/// Decode the body as JSON, whatever the status.
fn parse_json(response: &HttpResponse) -> Result<Value, ApiError> {
    serde_json::from_str(&response.body)
        .map_err(|e| ApiError::Transport(format!("HTTP {}: invalid JSON body: {e}", response.status)))
}
