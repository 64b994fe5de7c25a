//! Structured logging module for the vault console shell
//!
//! Provides consistent, contextual logging across the shell.
//! Every event carries an `operation` field so logs can be filtered per subsystem.

/// Operations that emit structured log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    MenuExpand,
    Navigation,
    NotificationMount,
    NotificationRetire,
    ErrorClassification,
    ComponentResolve,
    Viewport,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::MenuExpand => "menu_expand",
            LogOperation::Navigation => "navigation",
            LogOperation::NotificationMount => "notification_mount",
            LogOperation::NotificationRetire => "notification_retire",
            LogOperation::ErrorClassification => "error_classification",
            LogOperation::ComponentResolve => "component_resolve",
            LogOperation::Viewport => "viewport",
        }
    }
}

/// Log the outcome of an EXPAND_MENU commit
pub fn log_menu_expand(locator: &str, expanded: bool, applied: bool) {
    if applied {
        tracing::debug!(
            operation = LogOperation::MenuExpand.as_str(),
            locator = locator,
            expanded = expanded,
            "Menu group expansion updated"
        );
    } else {
        tracing::trace!(
            operation = LogOperation::MenuExpand.as_str(),
            locator = locator,
            expanded = expanded,
            "Menu expansion ignored (no expandable node)"
        );
    }
}

/// Log a navigation attempt passing through the router guard
pub fn log_navigation(target: &str, closed_sidebar: bool) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        target = target,
        closed_sidebar = closed_sidebar,
        "Navigation guard passed"
    );
}

/// Log a failed asynchronous guard step (navigation still proceeds)
pub fn log_navigation_step_error(target: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Navigation.as_str(),
        target = target,
        error = error,
        "Navigation guard step failed, proceeding anyway"
    );
}

/// Log an alert mounted into its container
pub fn log_notification_mounted(id: &str, container: &str, duration_ms: u32) {
    tracing::debug!(
        operation = LogOperation::NotificationMount.as_str(),
        notification_id = id,
        container = container,
        duration_ms = duration_ms,
        "Notification mounted"
    );
}

/// Log an alert dropped because its container is not rendered
pub fn log_notification_dropped(container: &str, title: &str) {
    tracing::warn!(
        operation = LogOperation::NotificationMount.as_str(),
        container = container,
        title = title,
        "Notification container not mounted, dropping notification"
    );
}

/// Log an alert leaving the surface
pub fn log_notification_retired(id: &str, reason: &str) {
    tracing::debug!(
        operation = LogOperation::NotificationRetire.as_str(),
        notification_id = id,
        reason = reason,
        "Notification retired"
    );
}

/// Log the full, untruncated detail of a failed backend call
pub fn log_transport_failure(status: Option<u16>, detail: &str) {
    match status {
        Some(status) => tracing::warn!(
            operation = LogOperation::ErrorClassification.as_str(),
            status = status,
            detail = detail,
            "Backend request failed"
        ),
        None => tracing::warn!(
            operation = LogOperation::ErrorClassification.as_str(),
            detail = detail,
            "Backend request failed without a response"
        ),
    }
}

/// Log a component key resolution
pub fn log_component_resolved(key: &str, first_load: bool) {
    tracing::trace!(
        operation = LogOperation::ComponentResolve.as_str(),
        component_key = key,
        first_load = first_load,
        "Component resolved"
    );
}

/// Log a viewport-driven device class change
pub fn log_device_change(device: &str, width: f64) {
    tracing::debug!(
        operation = LogOperation::Viewport.as_str(),
        device = device,
        width = width,
        "Device class changed"
    );
}
