//! Contact form submission against simulated endpoints
//!
//! Each test swaps in a scripted `FormTransport` so the success, rejection
//! and network-failure paths can be exercised without a server.

use std::cell::RefCell;

use async_trait::async_trait;
use portfolio_core::contact::SUCCESS_MESSAGE;
use portfolio_core::error::{GENERIC_REJECTION_MESSAGE, NETWORK_ERROR_MESSAGE};
use portfolio_core::{
    submit_contact, ContactForm, ContactSession, FormTransport, SubmissionStatus, SubmitError,
    TransportResponse,
};

/// Transport that replays one canned outcome and records what it was sent.
struct ScriptedTransport {
    outcome: Result<TransportResponse, SubmitError>,
    sent: RefCell<Vec<Vec<(String, String)>>>,
}

impl ScriptedTransport {
    fn responding(status: u16, body: &str) -> Self {
        Self {
            outcome: Ok(TransportResponse::new(status, body)),
            sent: RefCell::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            outcome: Err(SubmitError::Network("connection refused".to_string())),
            sent: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.sent.borrow().len()
    }
}

#[async_trait(?Send)]
impl FormTransport for ScriptedTransport {
    async fn post_form(&self, fields: &[(&str, &str)]) -> Result<TransportResponse, SubmitError> {
        self.sent.borrow_mut().push(
            fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self.outcome.clone()
    }
}

fn filled_session() -> ContactSession {
    let mut session = ContactSession::new();
    session.set_name("Ada Lovelace");
    session.set_email("ada@example.com");
    session.set_message("I'd like to discuss a data project.");
    session
}

// ============================================================================
// Success
// ============================================================================

#[tokio::test]
async fn test_success_clears_form_and_shows_indicator() {
    let transport = ScriptedTransport::responding(200, r#"{"next":"/thanks","ok":true}"#);
    let mut session = filled_session();

    assert!(session.submit(&transport).await);

    assert_eq!(session.status, SubmissionStatus::Succeeded);
    assert_eq!(session.status.notice(), Some(SUCCESS_MESSAGE));
    assert_eq!(session.form, ContactForm::default());
}

#[tokio::test]
async fn test_fields_sent_in_order() {
    let transport = ScriptedTransport::responding(200, "{}");
    let mut session = filled_session();
    session.submit(&transport).await;

    let sent = transport.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0],
        vec![
            ("name".to_string(), "Ada Lovelace".to_string()),
            ("email".to_string(), "ada@example.com".to_string()),
            ("message".to_string(), "I'd like to discuss a data project.".to_string()),
        ]
    );
}

// ============================================================================
// Rejection
// ============================================================================

#[tokio::test]
async fn test_rejection_shows_server_text() {
    let transport = ScriptedTransport::responding(
        422,
        r#"{"errors":[{"field":"email","code":"TYPE_EMAIL","message":"should be an email"}]}"#,
    );
    let mut session = filled_session();
    session.submit(&transport).await;

    assert_eq!(session.status.error_message(), Some("should be an email"));
    assert_eq!(session.form.name, "Ada Lovelace");
}

#[tokio::test]
async fn test_rejection_without_text_shows_generic_fallback() {
    let transport = ScriptedTransport::responding(500, "<html>Internal Server Error</html>");
    let mut session = filled_session();
    session.submit(&transport).await;

    assert_eq!(
        session.status,
        SubmissionStatus::Failed(GENERIC_REJECTION_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn test_submit_contact_reports_status() {
    let transport = ScriptedTransport::responding(403, r#"{"error":"Form disabled"}"#);
    let form = ContactForm::new("Ada", "ada@example.com", "Hi");

    let err = submit_contact(&transport, &form).await.unwrap_err();
    assert_eq!(
        err,
        SubmitError::Rejected {
            status: 403,
            message: Some("Form disabled".to_string()),
        }
    );
}

// ============================================================================
// Network Failure
// ============================================================================

#[tokio::test]
async fn test_network_failure_shows_network_message() {
    let transport = ScriptedTransport::failing();
    let mut session = filled_session();
    session.submit(&transport).await;

    assert_eq!(session.status.error_message(), Some(NETWORK_ERROR_MESSAGE));
    assert!(!session.status.is_success());
    assert_eq!(session.form.email, "ada@example.com");
}

// ============================================================================
// Guards
// ============================================================================

#[tokio::test]
async fn test_incomplete_form_sends_nothing() {
    let transport = ScriptedTransport::responding(200, "{}");
    let mut session = ContactSession::new();
    session.set_name("Ada");
    session.set_email("ada@example.com");

    assert!(!session.submit(&transport).await);
    assert_eq!(transport.calls(), 0);
    assert_eq!(session.status, SubmissionStatus::Idle);
}

#[tokio::test]
async fn test_retry_after_failure_can_succeed() {
    let mut session = filled_session();
    session.submit(&ScriptedTransport::failing()).await;
    assert!(session.status.error_message().is_some());

    let ok = ScriptedTransport::responding(200, "{}");
    assert!(session.submit(&ok).await);
    assert!(session.status.is_success());
}
