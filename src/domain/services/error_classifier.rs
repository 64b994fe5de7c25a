//! Turns failed backend calls into user-facing alerts.
//!
//! Classification is a pure function of the [`TransportOutcome`]; the only side
//! effect is the diagnostic log carrying the full, untruncated detail.

use crate::domain::models::{NotificationRequest, NotificationType, TransportOutcome};
use crate::shared::logging::log_transport_failure;

/// Messages longer than this stay on screen for [`LONG_MESSAGE_DURATION_MS`]
pub const LONG_MESSAGE_THRESHOLD: usize = 60;
pub const LONG_MESSAGE_DURATION_MS: u32 = 20_000;
pub const SHORT_MESSAGE_DURATION_MS: u32 = 4_500;

pub const NOT_FOUND_MESSAGE: &str = "Not found";
pub const UNREACHABLE_MESSAGE: &str = "Console or vault is unreachable";
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please login first";

/// Which decision table applies at a call site
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Full status-code branching; falls back to the login row without a response
    #[default]
    StatusAware,
    /// Collapsed policy: every failure asks the user to log in
    LoginRequired,
}

/// Classify with the status-aware policy
pub fn classify(outcome: &TransportOutcome) -> NotificationRequest {
    classify_with(ErrorPolicy::StatusAware, outcome)
}

pub fn classify_with(policy: ErrorPolicy, outcome: &TransportOutcome) -> NotificationRequest {
    log_transport_failure(outcome.status(), &outcome.detail());

    let status = match (policy, outcome.status()) {
        (ErrorPolicy::StatusAware, Some(status)) => status,
        _ => return login_required(),
    };

    if let Some(message) = outcome.error_message() {
        // Length in UTF-16 code units, as browsers measure strings
        let duration_ms = if message.encode_utf16().count() > LONG_MESSAGE_THRESHOLD {
            LONG_MESSAGE_DURATION_MS
        } else {
            SHORT_MESSAGE_DURATION_MS
        };
        return danger(format!("Error: {}", status), message.to_string(), Some(duration_ms));
    }

    match status {
        404 => danger("Error: 404".to_string(), NOT_FOUND_MESSAGE.to_string(), None),
        // Gateway timeout: the console backend or vault itself is down
        504 => danger("Error: 504".to_string(), UNREACHABLE_MESSAGE.to_string(), None),
        other => danger(format!("Error: {}", other), String::new(), None),
    }
}

fn login_required() -> NotificationRequest {
    danger("Error".to_string(), LOGIN_REQUIRED_MESSAGE.to_string(), None)
}

fn danger(title: String, message: String, duration_ms: Option<u32>) -> NotificationRequest {
    NotificationRequest {
        title,
        message,
        kind: NotificationType::Danger,
        duration_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_found() {
        let request = classify(&TransportOutcome::response(404, Some(json!({}))));

        assert_eq!(request.title, "Error: 404");
        assert_eq!(request.message, "Not found");
        assert_eq!(request.kind, NotificationType::Danger);
        assert_eq!(request.duration_ms, None);
    }

    #[test]
    fn test_gateway_timeout_reports_unreachable() {
        let request = classify(&TransportOutcome::response(504, Some(json!({}))));

        assert_eq!(request.title, "Error: 504");
        assert!(request.message.contains("unreachable"));
        assert_eq!(request.kind, NotificationType::Danger);
    }

    #[test]
    fn test_body_error_duration_scales_with_length() {
        let long = classify(&TransportOutcome::response(400, Some(json!({"error": "x".repeat(61)}))));
        assert_eq!(long.title, "Error: 400");
        assert_eq!(long.message, "x".repeat(61));
        assert_eq!(long.duration_ms, Some(20000));

        let short = classify(&TransportOutcome::response(400, Some(json!({"error": "short"}))));
        assert_eq!(short.message, "short");
        assert_eq!(short.duration_ms, Some(4500));

        let boundary = classify(&TransportOutcome::response(400, Some(json!({"error": "x".repeat(60)}))));
        assert_eq!(boundary.duration_ms, Some(4500));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // 31 emoji are 62 UTF-16 units but only 31 chars
        let emoji = classify(&TransportOutcome::response(403, Some(json!({"error": "😀".repeat(31)}))));
        assert_eq!(emoji.duration_ms, Some(20000));

        let accented = classify(&TransportOutcome::response(403, Some(json!({"error": "é".repeat(60)}))));
        assert_eq!(accented.duration_ms, Some(4500));
    }

    #[test]
    fn test_body_error_wins_over_status_rows() {
        let request = classify(&TransportOutcome::response(404, Some(json!({"error": "no such secret"}))));

        assert_eq!(request.title, "Error: 404");
        assert_eq!(request.message, "no such secret");
    }

    #[test]
    fn test_generic_status() {
        let request = classify(&TransportOutcome::response(500, Some(json!({}))));

        assert_eq!(request.title, "Error: 500");
        assert_eq!(request.message, "");
        assert_eq!(request.kind, NotificationType::Danger);
        assert_eq!(request.duration_ms, None);
    }

    #[test]
    fn test_malformed_body_falls_through_to_status() {
        let request = classify(&TransportOutcome::response(418, Some(json!({"error": ["not", "a", "string"]}))));
        assert_eq!(request.title, "Error: 418");
        assert_eq!(request.message, "");

        let request = classify(&TransportOutcome::from_parts(502, "upstream exploded"));
        assert_eq!(request.title, "Error: 502");
        assert_eq!(request.message, "");
    }

    #[test]
    fn test_no_response_asks_for_login() {
        let request = classify(&TransportOutcome::NoResponse);

        assert_eq!(request.title, "Error");
        assert_eq!(request.message, "Please login first");
        assert_eq!(request.kind, NotificationType::Danger);
    }

    #[test]
    fn test_login_required_policy_ignores_status() {
        let request = classify_with(
            ErrorPolicy::LoginRequired,
            &TransportOutcome::response(404, Some(json!({"error": "missing"}))),
        );

        assert_eq!(request.title, "Error");
        assert_eq!(request.message, LOGIN_REQUIRED_MESSAGE);
    }
}
