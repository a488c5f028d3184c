//! Trait seams for the grievance API, token refresh and session access,
//! enabling mocking in tests

use super::client::GrievanceRequest;
use super::error::ClientError;
use async_trait::async_trait;
use serde_json::Value;

/// Grievance backend operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GrievanceApi: Send + Sync {
    /// POST a grievance and return the parsed JSON reply body
    async fn post_grievance(
        &self,
        request: &GrievanceRequest,
        access_token: Option<String>,
    ) -> Result<Value, ClientError>;
}

/// Supplies fresh access credentials.
///
/// A successful refresh persists the new token into the session store, so
/// callers re-read it from there afterwards.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn refresh(&self) -> bool;
}

/// Read access to the signed-in user's persisted credentials
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn registration_number(&self) -> Option<String>;
}
