//! Contact form submission
//!
//! One form, one request at a time. A submission moves the session from
//! `Idle` to `Submitting`, then to exactly one of `Succeeded` or `Failed`.
//! Editing a field afterwards drops back to `Idle`.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::SubmitError;

pub const SUCCESS_MESSAGE: &str = "Thanks! Your message has been sent.";

/// Field values of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// All fields are required; whitespace alone does not count.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Form-encoded field pairs in submission order.
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("message", self.message.as_str()),
        ]
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Where one form interaction currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Carries the message shown to the visitor
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Succeeded)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Inline text to show under the form, if any.
    pub fn notice(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Succeeded => Some(SUCCESS_MESSAGE),
            SubmissionStatus::Failed(message) => Some(message),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }
}

/// Raw response from the form endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends form fields to the remote endpoint.
///
/// Futures are not `Send` so the browser fetch backend can implement this.
#[async_trait(?Send)]
pub trait FormTransport {
    async fn post_form(&self, fields: &[(&str, &str)]) -> Result<TransportResponse, SubmitError>;
}

/// Pull the human-readable error out of a rejection body.
///
/// Formspree answers `{"errors":[{"field":..,"message":..}]}`; older
/// endpoints use `{"error":".."}`. Blank or non-string messages are skipped
/// without discarding their siblings.
pub fn extract_error_message(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;

    let joined = parsed
        .get("errors")
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.get("message").and_then(Value::as_str))
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();

    if !joined.is_empty() {
        return Some(joined);
    }

    parsed
        .get("error")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
}

/// Send one submission and classify the result.
pub async fn submit_contact(
    transport: &dyn FormTransport,
    form: &ContactForm,
) -> Result<(), SubmitError> {
    let response = transport.post_form(&form.fields()).await?;

    if response.is_success() {
        tracing::info!(status = response.status, "Contact form submitted");
        return Ok(());
    }

    let message = extract_error_message(&response.body);
    tracing::warn!(
        status = response.status,
        server_message = message.as_deref().unwrap_or("<none>"),
        "Contact form rejected"
    );
    Err(SubmitError::Rejected {
        status: response.status,
        message,
    })
}

/// Form contents plus status for the lifetime of one page view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSession {
    pub form: ContactForm,
    pub status: SubmissionStatus,
}

impl ContactSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.form.name = value.into();
        self.touch();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.email = value.into();
        self.touch();
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.form.message = value.into();
        self.touch();
    }

    fn touch(&mut self) {
        if matches!(
            self.status,
            SubmissionStatus::Succeeded | SubmissionStatus::Failed(_)
        ) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Start a submission. Returns the snapshot to send, or `None` when the
    /// form is incomplete or a request is already in flight.
    pub fn begin(&mut self) -> Option<ContactForm> {
        if self.status.is_submitting() {
            tracing::debug!("Submission already in flight");
            return None;
        }
        if !self.form.is_complete() {
            tracing::debug!(missing = ?self.form.missing_fields(), "Contact form incomplete");
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        Some(self.form.clone())
    }

    /// Settle the in-flight submission.
    pub fn finish(&mut self, outcome: Result<(), SubmitError>) {
        match outcome {
            Ok(()) => {
                self.form.clear();
                self.status = SubmissionStatus::Succeeded;
            }
            Err(e) => {
                self.status = SubmissionStatus::Failed(e.user_message());
            }
        }
    }

    /// `begin`, send, `finish` in one call. Returns false if nothing was sent.
    pub async fn submit(&mut self, transport: &dyn FormTransport) -> bool {
        let Some(snapshot) = self.begin() else {
            return false;
        };
        let outcome = submit_contact(transport, &snapshot).await;
        self.finish(outcome);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GENERIC_REJECTION_MESSAGE, NETWORK_ERROR_MESSAGE};

    fn complete_session() -> ContactSession {
        let mut session = ContactSession::new();
        session.set_name("Ada Lovelace");
        session.set_email("ada@example.com");
        session.set_message("Let's talk about engines.");
        session
    }

    #[test]
    fn test_missing_fields_ignores_whitespace() {
        let form = ContactForm::new("Ada", "   ", "");
        assert!(!form.is_complete());
        assert_eq!(form.missing_fields(), vec!["email", "message"]);
    }

    #[test]
    fn test_fields_order() {
        let form = ContactForm::new("a", "b", "c");
        let names: Vec<_> = form.fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["name", "email", "message"]);
    }

    #[test]
    fn test_begin_requires_complete_form() {
        let mut session = ContactSession::new();
        session.set_name("Ada");
        assert!(session.begin().is_none());
        assert_eq!(session.status, SubmissionStatus::Idle);
    }

    #[test]
    fn test_begin_blocks_second_submission() {
        let mut session = complete_session();
        assert!(session.begin().is_some());
        assert!(session.status.is_submitting());
        assert!(session.begin().is_none());
    }

    #[test]
    fn test_finish_success_clears_form() {
        let mut session = complete_session();
        session.begin();
        session.finish(Ok(()));
        assert_eq!(session.form, ContactForm::default());
        assert_eq!(session.status.notice(), Some(SUCCESS_MESSAGE));
    }

    #[test]
    fn test_finish_failure_keeps_form() {
        let mut session = complete_session();
        session.begin();
        session.finish(Err(SubmitError::Network("refused".to_string())));
        assert_eq!(session.form.name, "Ada Lovelace");
        assert_eq!(session.status.error_message(), Some(NETWORK_ERROR_MESSAGE));
        assert!(!session.status.is_success());
    }

    #[test]
    fn test_editing_after_result_resets_status() {
        let mut session = complete_session();
        session.begin();
        session.finish(Err(SubmitError::Rejected {
            status: 400,
            message: None,
        }));
        assert_eq!(session.status.notice(), Some(GENERIC_REJECTION_MESSAGE));

        session.set_message("Second try");
        assert_eq!(session.status, SubmissionStatus::Idle);
    }

    #[test]
    fn test_editing_while_submitting_keeps_status() {
        let mut session = complete_session();
        session.begin();
        session.set_name("Grace");
        assert!(session.status.is_submitting());
    }

    #[test]
    fn test_extract_formspree_errors() {
        let body = r#"{"errors":[{"field":"email","code":"TYPE_EMAIL","message":"should be an email"},{"message":"too short"}]}"#;
        assert_eq!(
            extract_error_message(body),
            Some("should be an email, too short".to_string())
        );
    }

    #[test]
    fn test_extract_top_level_error() {
        assert_eq!(
            extract_error_message(r#"{"error":"Form not found"}"#),
            Some("Form not found".to_string())
        );
    }

    #[test]
    fn test_extract_nothing_useful() {
        assert_eq!(extract_error_message("<html>502</html>"), None);
        assert_eq!(extract_error_message(r#"{"ok":false}"#), None);
        assert_eq!(extract_error_message(r#"{"errors":[{"message":"  "}]}"#), None);
        assert_eq!(extract_error_message(""), None);
    }

    #[test]
    fn test_extract_falls_back_when_errors_is_null() {
        assert_eq!(
            extract_error_message(r#"{"errors":null,"error":"Form not found"}"#),
            Some("Form not found".to_string())
        );
    }

    #[test]
    fn test_extract_skips_non_string_messages() {
        let body = r#"{"errors":[{"message":"should be an email"},{"message":42},"oops"]}"#;
        assert_eq!(extract_error_message(body), Some("should be an email".to_string()));
        assert_eq!(
            extract_error_message(r#"{"errors":[{"message":7}],"error":{"code":1}}"#),
            None
        );
    }

    #[test]
    fn test_response_success_range() {
        assert!(TransportResponse::new(200, "").is_success());
        assert!(TransportResponse::new(204, "").is_success());
        assert!(!TransportResponse::new(302, "").is_success());
        assert!(!TransportResponse::new(422, "").is_success());
    }
}
