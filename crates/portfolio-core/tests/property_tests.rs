//! Property tests for error-message extraction

use portfolio_core::extract_error_message;
use proptest::prelude::*;

proptest! {
    /// Arbitrary bodies never panic and never yield blank text
    #[test]
    fn extract_never_returns_blank(body in ".*") {
        if let Some(message) = extract_error_message(&body) {
            prop_assert!(!message.trim().is_empty());
        }
    }

    /// Every non-blank message in a Formspree body shows up in the result
    #[test]
    fn extract_keeps_all_messages(messages in prop::collection::vec("[a-zA-Z ]{0,20}", 1..5)) {
        let errors: Vec<_> = messages
            .iter()
            .map(|m| serde_json::json!({ "message": m }))
            .collect();
        let body = serde_json::json!({ "errors": errors }).to_string();

        let expected: Vec<&str> = messages
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .collect();

        let result = extract_error_message(&body);
        if expected.is_empty() {
            prop_assert_eq!(result, None);
        } else {
            prop_assert_eq!(result, Some(expected.join(", ")));
        }
    }
}
