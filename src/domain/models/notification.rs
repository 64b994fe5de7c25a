//! Transient alert types shared by the notification and message services

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Severity of an alert, used for styling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Danger,
    Warning,
    Success,
    Info,
    #[default]
    #[serde(rename = "")]
    None,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Danger => "danger",
            NotificationType::Warning => "warning",
            NotificationType::Success => "success",
            NotificationType::Info => "info",
            NotificationType::None => "",
        }
    }

    /// Modifier class for the alert element (empty for untyped alerts)
    pub fn css_class(&self) -> String {
        match self {
            NotificationType::None => String::new(),
            kind => format!("is-{}", kind.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub Uuid);

impl NotificationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Options accepted by `create`.
///
/// Every field is optional for the caller:
/// - `title`: `""`
/// - `message`: `""`
/// - `kind`: [`NotificationType::None`]
/// - `direction`: `""`
/// - `duration_ms`: service default (4500 for notifications, 1500 for messages)
/// - `container`: service default (`.notifications` or `.messages`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationOptions {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub direction: String,
    #[serde(rename = "duration")]
    pub duration_ms: Option<u32>,
    pub container: Option<String>,
}

impl NotificationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(mut self, kind: NotificationType) -> Self {
        self.kind = kind;
        self
    }

    pub fn direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = direction.into();
        self
    }

    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn container(mut self, container: impl Into<String>) -> Self {
        self.container = Some(container.into());
        self
    }
}

/// Request produced by the error classifier. `duration_ms: None` means the
/// receiving service's default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    #[serde(rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u32>,
}

impl From<NotificationRequest> for NotificationOptions {
    fn from(request: NotificationRequest) -> Self {
        Self {
            title: request.title,
            message: request.message,
            kind: request.kind,
            duration_ms: request.duration_ms,
            ..Default::default()
        }
    }
}

/// A mounted alert. Lives only while visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationInstance {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub direction: String,
    pub duration_ms: u32,
    pub container: String,
}
