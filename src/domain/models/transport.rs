use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Failure result of a backend request, as handed over by the API client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransportOutcome {
    /// The backend answered with a failing status
    Response {
        status: u16,
        #[serde(default)]
        body: Option<Value>,
    },
    /// The request never produced a response (network layer, aborted, not logged in)
    NoResponse,
}

impl TransportOutcome {
    pub fn response(status: u16, body: Option<Value>) -> Self {
        TransportOutcome::Response { status, body }
    }

    /// Build from a status and the raw body text. Bodies that are not JSON are kept
    /// as a plain string value so the diagnostic log still shows them.
    pub fn from_parts(status: u16, body_text: &str) -> Self {
        let body = if body_text.trim().is_empty() {
            None
        } else {
            Some(
                serde_json::from_str(body_text)
                    .unwrap_or_else(|_| Value::String(body_text.to_string())),
            )
        };
        TransportOutcome::Response { status, body }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            TransportOutcome::Response { status, .. } => Some(*status),
            TransportOutcome::NoResponse => None,
        }
    }

    /// `body.error` when it is a non-empty string
    pub fn error_message(&self) -> Option<&str> {
        match self {
            TransportOutcome::Response { body: Some(body), .. } => body
                .get("error")
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty()),
            _ => None,
        }
    }

    /// Full detail for the diagnostic log
    pub fn detail(&self) -> String {
        match self {
            TransportOutcome::Response { body: Some(body), .. } => body.to_string(),
            TransportOutcome::Response { body: None, .. } => String::new(),
            TransportOutcome::NoResponse => "no response".to_string(),
        }
    }
}
