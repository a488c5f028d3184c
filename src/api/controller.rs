//! Grievance submission with a single token-refresh retry

use super::client::{GrievanceRequest, ServerReply};
use super::error::ClientError;
use super::traits::{GrievanceApi, SessionStore, TokenProvider};
use crate::state::{GrievanceDraft, SubmissionPhase};
use std::sync::Arc;

/// Alert shown after the server accepts a grievance
pub const REGISTERED_MESSAGE: &str = "Complaint Registered Successfully";

/// Resubmissions allowed after a successful token refresh
const MAX_AUTH_RETRIES: u32 = 1;

/// How a submission attempt ended
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Server accepted the grievance
    Registered,
    /// Server kept rejecting the credentials; `refreshed` tells whether a
    /// refresh succeeded before giving up
    Unauthorised { refreshed: bool },
    /// Server replied with a falsy JSON body
    EmptyReply,
    /// Transport or parse failure
    Failed(ClientError),
}

/// Sends grievances and interprets the replies
pub struct SubmissionController {
    api: Box<dyn GrievanceApi>,
    tokens: Box<dyn TokenProvider>,
    session: Arc<dyn SessionStore>,
}

impl SubmissionController {
    pub fn new(
        api: Box<dyn GrievanceApi>,
        tokens: Box<dyn TokenProvider>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            api,
            tokens,
            session,
        }
    }

    /// Build the wire body for a validated draft
    pub fn build_request(&self, draft: &GrievanceDraft) -> GrievanceRequest {
        GrievanceRequest::new(self.session.registration_number(), draft)
    }

    /// Submit a validated grievance.
    ///
    /// An "Unauthorised Access" reply triggers one token refresh followed by
    /// one resubmission of the identical body with the refreshed token.
    /// `on_phase` sees `Submitting` before every POST and `AuthRetry` before
    /// the refresh.
    pub async fn submit<F>(&self, draft: &GrievanceDraft, mut on_phase: F) -> SubmitOutcome
    where
        F: FnMut(SubmissionPhase),
    {
        let request = self.build_request(draft);
        let mut retries = 0;

        loop {
            on_phase(SubmissionPhase::Submitting);
            let token = self.session.access_token();
            let body = match self.api.post_grievance(&request, token).await {
                Ok(body) => body,
                Err(err) => {
                    tracing::error!("Grievance submission failed: {err}");
                    return SubmitOutcome::Failed(err);
                }
            };

            match ServerReply::classify(&body) {
                ServerReply::Accepted => {
                    tracing::info!("Grievance registered: {body}");
                    return SubmitOutcome::Registered;
                }
                ServerReply::Empty => {
                    tracing::warn!("Grievance reply was empty: {body}");
                    return SubmitOutcome::EmptyReply;
                }
                ServerReply::Unauthorised if retries >= MAX_AUTH_RETRIES => {
                    tracing::warn!("Still unauthorised after token refresh, giving up");
                    return SubmitOutcome::Unauthorised { refreshed: true };
                }
                ServerReply::Unauthorised => {
                    on_phase(SubmissionPhase::AuthRetry);
                    if !self.tokens.refresh().await {
                        tracing::warn!("Unauthorised and token refresh failed");
                        return SubmitOutcome::Unauthorised { refreshed: false };
                    }
                    retries += 1;
                    tracing::info!("Token refreshed, resubmitting grievance");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockGrievanceApi, MockSessionStore, MockTokenProvider};
    use mockall::predicate::eq;
    use mockall::Sequence;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Mutex;

    fn wifi_draft() -> GrievanceDraft {
        GrievanceDraft {
            subject: "Wifi down".to_string(),
            complaint: "No wifi in hostel".to_string(),
            related_departments: vec!["any".to_string()],
        }
    }

    fn wifi_request() -> GrievanceRequest {
        GrievanceRequest {
            reg_no: Some("21BCE1001".to_string()),
            subject: "Wifi down".to_string(),
            complaint: "No wifi in hostel".to_string(),
            related_depts: vec!["any".to_string()],
        }
    }

    fn session_with_token(token: &'static str) -> MockSessionStore {
        let mut session = MockSessionStore::new();
        session
            .expect_registration_number()
            .returning(|| Some("21BCE1001".to_string()));
        session
            .expect_access_token()
            .returning(move || Some(token.to_string()));
        session
    }

    fn controller(
        api: MockGrievanceApi,
        tokens: MockTokenProvider,
        session: MockSessionStore,
    ) -> SubmissionController {
        SubmissionController::new(Box::new(api), Box::new(tokens), Arc::new(session))
    }

    /// Submit and collect the phases reported along the way
    async fn submit_tracked(ctrl: &SubmissionController) -> (SubmitOutcome, Vec<SubmissionPhase>) {
        let mut phases = Vec::new();
        let outcome = ctrl.submit(&wifi_draft(), |phase| phases.push(phase)).await;
        (outcome, phases)
    }

    #[test]
    fn test_build_request_reads_registration_number() {
        let ctrl = controller(
            MockGrievanceApi::new(),
            MockTokenProvider::new(),
            session_with_token("t"),
        );
        assert_eq!(ctrl.build_request(&wifi_draft()), wifi_request());
    }

    #[tokio::test]
    async fn test_success_posts_once() {
        let mut api = MockGrievanceApi::new();
        api.expect_post_grievance()
            .with(eq(wifi_request()), eq(Some("tok".to_string())))
            .times(1)
            .returning(|_, _| Ok(json!({ "message": "Complaint registered" })));
        let mut tokens = MockTokenProvider::new();
        tokens.expect_refresh().never();

        let ctrl = controller(api, tokens, session_with_token("tok"));
        let (outcome, phases) = submit_tracked(&ctrl).await;
        assert!(matches!(outcome, SubmitOutcome::Registered));
        assert_eq!(phases, vec![SubmissionPhase::Submitting]);
    }

    #[tokio::test]
    async fn test_unauthorised_refreshes_and_retries_once() {
        let current = Arc::new(Mutex::new("old".to_string()));
        let mut session = MockSessionStore::new();
        session
            .expect_registration_number()
            .returning(|| Some("21BCE1001".to_string()));
        let reader = current.clone();
        session
            .expect_access_token()
            .returning(move || Some(reader.lock().unwrap().clone()));

        let mut seq = Sequence::new();
        let mut api = MockGrievanceApi::new();
        let mut tokens = MockTokenProvider::new();
        api.expect_post_grievance()
            .with(eq(wifi_request()), eq(Some("old".to_string())))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(json!({ "message": "Unauthorised Access" })));
        let writer = current.clone();
        tokens
            .expect_refresh()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move || {
                *writer.lock().unwrap() = "new".to_string();
                true
            });
        api.expect_post_grievance()
            .with(eq(wifi_request()), eq(Some("new".to_string())))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(json!({ "id": 7 })));

        let ctrl = controller(api, tokens, session);
        let (outcome, phases) = submit_tracked(&ctrl).await;
        assert!(matches!(outcome, SubmitOutcome::Registered));
        assert_eq!(
            phases,
            vec![
                SubmissionPhase::Submitting,
                SubmissionPhase::AuthRetry,
                SubmissionPhase::Submitting,
            ]
        );
    }

    #[tokio::test]
    async fn test_retry_is_bounded() {
        let mut api = MockGrievanceApi::new();
        api.expect_post_grievance()
            .times(2)
            .returning(|_, _| Ok(json!({ "message": "Unauthorised Access" })));
        let mut tokens = MockTokenProvider::new();
        tokens.expect_refresh().times(1).returning(|| true);

        let ctrl = controller(api, tokens, session_with_token("tok"));
        let (outcome, phases) = submit_tracked(&ctrl).await;
        assert!(matches!(
            outcome,
            SubmitOutcome::Unauthorised { refreshed: true }
        ));
        assert_eq!(
            phases,
            vec![
                SubmissionPhase::Submitting,
                SubmissionPhase::AuthRetry,
                SubmissionPhase::Submitting,
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_refresh_stops_without_retry() {
        let mut api = MockGrievanceApi::new();
        api.expect_post_grievance()
            .times(1)
            .returning(|_, _| Ok(json!({ "message": "Unauthorised Access" })));
        let mut tokens = MockTokenProvider::new();
        tokens.expect_refresh().times(1).returning(|| false);

        let ctrl = controller(api, tokens, session_with_token("tok"));
        let (outcome, phases) = submit_tracked(&ctrl).await;
        assert!(matches!(
            outcome,
            SubmitOutcome::Unauthorised { refreshed: false }
        ));
        assert_eq!(
            phases,
            vec![SubmissionPhase::Submitting, SubmissionPhase::AuthRetry]
        );
    }

    #[tokio::test]
    async fn test_transport_error_is_reported() {
        let mut api = MockGrievanceApi::new();
        api.expect_post_grievance().times(1).returning(|_, _| {
            Err(ClientError::Json(
                serde_json::from_str::<serde_json::Value>("not json").unwrap_err(),
            ))
        });
        let mut tokens = MockTokenProvider::new();
        tokens.expect_refresh().never();

        let ctrl = controller(api, tokens, session_with_token("tok"));
        let (outcome, _) = submit_tracked(&ctrl).await;
        assert!(matches!(outcome, SubmitOutcome::Failed(ClientError::Json(_))));
    }

    #[tokio::test]
    async fn test_falsy_reply_is_not_success() {
        let mut api = MockGrievanceApi::new();
        api.expect_post_grievance()
            .times(1)
            .returning(|_, _| Ok(serde_json::Value::Null));

        let ctrl = controller(api, MockTokenProvider::new(), session_with_token("tok"));
        let (outcome, _) = submit_tracked(&ctrl).await;
        assert!(matches!(outcome, SubmitOutcome::EmptyReply));
    }

    #[test]
    fn test_submit_blocks_on_runtime() {
        // The controller future is runtime-agnostic
        let mut api = MockGrievanceApi::new();
        api.expect_post_grievance()
            .returning(|_, _| Ok(json!({ "ok": true })));
        let ctrl = controller(api, MockTokenProvider::new(), session_with_token("tok"));

        let outcome = tokio_test::block_on(ctrl.submit(&wifi_draft(), |_| {}));
        assert!(matches!(outcome, SubmitOutcome::Registered));
    }
}
