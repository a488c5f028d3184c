//! Grievance API module: HTTP client, session credentials, token refresh
//! and the submission controller

mod client;
mod controller;
mod error;
mod refresh;
mod session;
#[cfg(test)]
mod test_support;
mod traits;

pub use client::{GrievanceClient, DEFAULT_ADDRESS};
pub use controller::{SubmissionController, SubmitOutcome, REGISTERED_MESSAGE};
pub use refresh::HttpTokenRefresher;
pub use session::FileSession;

#[cfg(test)]
pub use client::GrievanceRequest;
#[cfg(test)]
pub use error::ClientError;
#[cfg(test)]
pub use traits::{MockGrievanceApi, MockSessionStore, MockTokenProvider, SessionStore};
