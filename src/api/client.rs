//! HTTP client for the grievance API
//!
//! Sends grievances as JSON over `reqwest` and hands the parsed reply back
//! to the submission controller for interpretation.

use super::error::ClientError;
use super::traits::GrievanceApi;
use crate::state::GrievanceDraft;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Default API address
pub const DEFAULT_ADDRESS: &str = "http://localhost:3000";

/// Path of the grievance submission endpoint
const GRIEVANCES_PATH: &str = "/grievances/";

/// Content type sent with every grievance
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Reply message that signals an expired or missing access token
pub const UNAUTHORISED_MESSAGE: &str = "Unauthorised Access";

/// Wire body of a grievance submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrievanceRequest {
    pub reg_no: Option<String>,
    pub subject: String,
    pub complaint: String,
    pub related_depts: Vec<String>,
}

impl GrievanceRequest {
    pub fn new(reg_no: Option<String>, draft: &GrievanceDraft) -> Self {
        Self {
            reg_no,
            subject: draft.subject.clone(),
            complaint: draft.complaint.clone(),
            related_depts: draft.related_departments.clone(),
        }
    }
}

/// How a reply body is interpreted.
///
/// Only the body matters; the HTTP status code is not consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerReply {
    /// `{"message": "Unauthorised Access"}`
    Unauthorised,
    /// Any other truthy JSON value
    Accepted,
    /// `null`, `false`, `0` or `""`
    Empty,
}

impl ServerReply {
    pub fn classify(body: &Value) -> Self {
        if body.get("message").and_then(Value::as_str) == Some(UNAUTHORISED_MESSAGE) {
            Self::Unauthorised
        } else if is_truthy(body) {
            Self::Accepted
        } else {
            Self::Empty
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Join the base address and the grievance path
pub fn grievances_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), GRIEVANCES_PATH)
}

/// Client for the grievance submission endpoint
pub struct GrievanceClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GrievanceClient {
    /// Create a new client for the API at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: grievances_endpoint(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GrievanceApi for GrievanceClient {
    async fn post_grievance(
        &self,
        request: &GrievanceRequest,
        access_token: Option<String>,
    ) -> Result<Value, ClientError> {
        let body = serde_json::to_vec(request)?;

        let mut builder = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body);
        if let Some(token) = access_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        tracing::debug!("POST {} -> {status} ({} bytes)", self.endpoint, bytes.len());

        Ok(serde_json::from_slice(&bytes)?)
    }
}
